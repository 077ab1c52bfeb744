//! IPPure Panel - IP purity at a glance
//!
//! This tool queries the IPPure reputation API for the current public IP and prints a
//! short panel with the purity score, fraud risk, IP type, ASN and location.
//!
//! The panel is printed in one of three formats: Text, JSON, or Table. When
//! `IPPURE_WEBHOOK_URL` is set, the same panel is also posted to that webhook.

use anyhow::{Context, Result};
use clap::Parser;
use ippure_panel::{
    run, Config, Fetcher, OutputFormat, PanelOutcome, ReqwestClient, StdoutReporter,
    WebhookReporter,
};

/// CLI arguments for the IPPure panel.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "IP purity panel for the IPPure reputation API",
    long_about = "Queries the IPPure \"My IP\" API and prints purity, fraud risk, IP type, \
                  ASN and location for the current public IP.\n\n\
                  Environment: IPPURE_API_URL, IPPURE_TIMEOUT_SECS, IPPURE_WEBHOOK_URL, \
                  IPPURE_WEBHOOK_TIMEOUT_SECS",
    override_usage = "ippure-panel [OPTIONS]"
)]
struct Cli {
    /// Output format: text, json, table
    #[arg(short, long, default_value = "text")]
    output: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity. env_logger writes to stderr.
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info })
        .init();

    let config = Config::new().context("Failed to load configuration")?;
    log::debug!("Loaded configuration: {:?}", config);

    let client = ReqwestClient::new(config.timeout)?;
    let fetcher = Fetcher::new(client, config.api_url.clone());
    let stdout = StdoutReporter::new(cli.output);

    let outcome = match &config.webhook_url {
        Some(url) => {
            let webhook = WebhookReporter::new(url, config.webhook_timeout)?;
            run(&fetcher, (stdout, webhook)).await?
        }
        None => run(&fetcher, stdout).await?,
    };

    if outcome == PanelOutcome::Failed {
        std::process::exit(1);
    }
    log::debug!("Panel complete");
    Ok(())
}
