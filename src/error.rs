//! Error Handling Module
//!
//! This module defines custom error types for the IPPure panel using the `thiserror` crate.
//! Every variant's message is what ends up after "请求失败：" in the failure panel.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("No HTTP client available in this runtime.")]
    CapabilityUnavailable,

    #[error("{0}")]
    Network(String),

    #[error("HTTP {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("Webhook delivery failed: {0}")]
    Webhook(String),
}

impl From<reqwest::Error> for PanelError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => PanelError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            },
            None => PanelError::Network(e.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PanelError>;
