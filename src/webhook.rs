//! Webhook Module
//!
//! This module forwards the finished panel to a remote webhook. It is a
//! [`Reporter`], so it is fired once per run and never retried.
use crate::error::PanelError;
use crate::models::PanelPayload;
use crate::reporter::Reporter;
use anyhow::{Context, Result};
use reqwest::{Client, Url};
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct WebhookPayload {
    #[serde(flatten)]
    panel: PanelPayload,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: &'static str,
}

/// WebhookReporter posts the panel payload to a webhook URL.
#[derive(Debug)]
pub struct WebhookReporter {
    client: Client,
    url: Url,
}

impl WebhookReporter {
    /// Creates a new WebhookReporter with the given URL and timeout.
    pub fn new(url: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        let url = Url::parse(url.as_ref()).context("Invalid webhook URL")?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client, url })
    }
}

impl Reporter for WebhookReporter {
    async fn done(self, payload: PanelPayload) -> Result<()> {
        let body = WebhookPayload {
            panel: payload,
            timestamp: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
        };
        log::info!("Sending panel to webhook: {}", self.url);
        let response = self
            .client
            .post(self.url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PanelError::Webhook("timeout".to_string())
                } else {
                    PanelError::Webhook(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            log::warn!("Webhook failed: HTTP {} - Response: {}", status, text);
            return Err(PanelError::Webhook(format!("HTTP {} - {}", status, text)).into());
        }
        log::info!("Successfully sent webhook");
        Ok(())
    }
}
