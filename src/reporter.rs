//! Reporter Module
//!
//! A reporter is the single-shot completion channel of a panel run. `done` takes
//! `self` by value, so a reporter cannot be fired twice.
use crate::models::PanelPayload;
use anyhow::{Context, Result};
use colored::*;
use prettytable::{row, Table};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::io::Write;
use std::str::FromStr;
use tokio::sync::oneshot;

pub trait Reporter {
    fn done(self, payload: PanelPayload) -> impl Future<Output = Result<()>> + Send;
}

/// Supported stdout renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Table,
}

impl FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

/// Writes the payload to stdout in the chosen format.
#[derive(Debug, Clone, Copy)]
pub struct StdoutReporter {
    format: OutputFormat,
}

impl StdoutReporter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

/// Renders a payload as plain text; [`StdoutReporter`] adds the colored title.
pub fn render(payload: &PanelPayload, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(payload)?,
        OutputFormat::Text => format!("{}\n{}", payload.title, payload.content),
        OutputFormat::Table => {
            let mut table = Table::new();
            table.add_row(row!["Field", "Value"]);
            table.add_row(row!["title", payload.title]);
            table.add_row(row!["content", payload.content]);
            table.add_row(row!["icon", payload.icon]);
            table.add_row(row!["icon-color", payload.icon_color]);
            table.to_string()
        }
    };
    Ok(rendered)
}

impl Reporter for StdoutReporter {
    async fn done(self, payload: PanelPayload) -> Result<()> {
        let rendered = match self.format {
            OutputFormat::Text => {
                let title = if payload.is_failure() {
                    payload.title.bold().red()
                } else {
                    payload.title.bold().green()
                };
                format!("{}\n{}", title, payload.content)
            }
            format => render(&payload, format)?,
        };
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", rendered).context("Failed to write panel to stdout")?;
        stdout.flush().context("Failed to flush stdout")?;
        Ok(())
    }
}

impl Reporter for oneshot::Sender<PanelPayload> {
    async fn done(self, payload: PanelPayload) -> Result<()> {
        self.send(payload)
            .map_err(|_| anyhow::anyhow!("Panel receiver dropped before completion"))
    }
}

/// Delivers the same payload to both reporters, first then second.
impl<A, B> Reporter for (A, B)
where
    A: Reporter + Send,
    B: Reporter + Send,
{
    async fn done(self, payload: PanelPayload) -> Result<()> {
        let (first, second) = self;
        first.done(payload.clone()).await?;
        second.done(payload).await
    }
}
