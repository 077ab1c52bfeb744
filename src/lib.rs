//! IPPure Panel Library
//!
//! This library queries the IPPure "My IP" reputation API and renders the result as a
//! six-line purity panel. It provides configuration, error handling, data models, the
//! HTTP fetcher, the formatter, and the reporters that receive the finished panel.

pub mod config;
pub mod error;
pub mod models;
pub mod fetcher;
pub mod formatter;
pub mod reporter;
pub mod webhook;
pub mod panel;

pub use config::Config;
pub use error::PanelError;
pub use fetcher::{Fetcher, HttpClient, ReqwestClient};
pub use formatter::{format_summary, parse_body};
pub use models::{IpInfo, PanelOutcome, PanelPayload};
pub use panel::run;
pub use reporter::{OutputFormat, Reporter, StdoutReporter};
pub use webhook::WebhookReporter;
