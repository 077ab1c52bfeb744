//! Panel Module
//!
//! One panel run: fetch the body, format the summary, report exactly once. Every
//! fetch or format error becomes the failure panel; nothing is retried.
use crate::error::Result;
use crate::fetcher::{Fetcher, HttpClient};
use crate::formatter::format_summary;
use crate::models::{PanelOutcome, PanelPayload};
use crate::reporter::Reporter;

async fn fetch_summary<C: HttpClient>(fetcher: &Fetcher<C>) -> Result<String> {
    let body = fetcher.fetch().await?;
    format_summary(&body)
}

/// Runs the panel and hands the resulting payload to `reporter`.
///
/// Returns the terminal state, or the reporter's own delivery error.
pub async fn run<C, R>(fetcher: &Fetcher<C>, reporter: R) -> anyhow::Result<PanelOutcome>
where
    C: HttpClient,
    R: Reporter,
{
    let (payload, outcome) = match fetch_summary(fetcher).await {
        Ok(content) => (PanelPayload::success(content), PanelOutcome::Succeeded),
        Err(e) => {
            log::warn!("Panel request failed: {}", e);
            (PanelPayload::failure(&e), PanelOutcome::Failed)
        }
    };
    reporter.done(payload).await?;
    Ok(outcome)
}
