//! Fetcher Module
//!
//! This module performs the single GET against the IPPure API. The HTTP capability is
//! injected through the [`HttpClient`] trait so the panel can run against a real
//! `reqwest` client, a mock server, or no client at all.
use crate::error::{PanelError, Result};
use anyhow::Context;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};

/// An asynchronous GET primitive resolving with the raw response body.
pub trait HttpClient {
    fn get(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// [`HttpClient`] backed by `reqwest`. Non-success statuses are errors.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    /// Creates a client with the given request timeout.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ippure-panel/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        if let Err(e) = response.error_for_status_ref() {
            warn!("IPPure API answered HTTP {}", response.status());
            return Err(e.into());
        }
        let body = response.text().await?;
        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

/// Issues the one request of a panel run.
#[derive(Debug)]
pub struct Fetcher<C> {
    client: Option<C>,
    url: String,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C, url: impl Into<String>) -> Self {
        Self {
            client: Some(client),
            url: url.into(),
        }
    }

    /// A fetcher whose HTTP capability is missing; every fetch fails.
    pub fn unavailable(url: impl Into<String>) -> Self {
        Self {
            client: None,
            url: url.into(),
        }
    }

    /// Performs exactly one GET and returns the body untouched.
    pub async fn fetch(&self) -> Result<String> {
        let client = self.client.as_ref().ok_or(PanelError::CapabilityUnavailable)?;
        info!("Querying {}", self.url);
        client.get(&self.url).await
    }
}
