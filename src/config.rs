//! Configuration Module
//!
//! This module reads configuration values from environment variables and provides
//! sensible defaults. Nothing here is required: with an empty environment the panel
//! queries the public IPPure endpoint and reports to stdout only.

use anyhow::Result;
use std::env;
use std::time::Duration;

/// The IPPure "My IP" information endpoint.
pub const DEFAULT_API_URL: &str = "https://my.ippure.com/v1/info";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub timeout: Duration,
    pub webhook_url: Option<String>,
    pub webhook_timeout: Duration,
}

impl Config {
    /// Creates a new configuration by reading environment variables.
    /// If a variable is missing or empty, a default value is used.
    pub fn new() -> Result<Self> {
        let api_url = non_empty_var("IPPURE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs: u64 = env::var("IPPURE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(10);

        if timeout_secs == 0 || timeout_secs > 300 {
            return Err(anyhow::anyhow!(
                "Request timeout must be between 1 and 300 seconds, got {}",
                timeout_secs
            ));
        }

        let webhook_timeout_secs: u64 = env::var("IPPURE_WEBHOOK_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(30);

        if webhook_timeout_secs == 0 || webhook_timeout_secs > 300 {
            return Err(anyhow::anyhow!(
                "Webhook timeout must be between 1 and 300 seconds, got {}",
                webhook_timeout_secs
            ));
        }

        let webhook_url = non_empty_var("IPPURE_WEBHOOK_URL");

        Ok(Config {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
            webhook_url,
            webhook_timeout: Duration::from_secs(webhook_timeout_secs),
        })
    }
}

// Trim before checking for emptiness.
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .map(|s| s.trim().to_string())
        .ok()
        .filter(|s| !s.is_empty())
}
