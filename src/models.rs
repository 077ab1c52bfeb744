//! Data Models Module
//!
//! This module defines the data structures used by the panel: the parsed IP
//! reputation record, the purity and risk labels, and the payload handed to a
//! reporter.
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PANEL_TITLE: &str = "IPPure - IP 纯净度";
pub const PLACEHOLDER: &str = "-";

const SUCCESS_ICON: &str = "shield.lefthalf.filled";
const SUCCESS_ICON_COLOR: &str = "#4A90E2";
const FAILURE_ICON: &str = "exclamationmark.triangle";
const FAILURE_ICON_COLOR: &str = "#D0021B";

/// One lookup result. Built once from the response body and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct IpInfo {
    pub ip: String,
    pub fraud_score: Option<f64>,
    pub purity: Option<f64>,
    pub is_residential: bool,
    pub is_broadcast: bool,
    pub asn: String,
    pub as_organization: String,
    pub location: String,
}

impl Default for IpInfo {
    fn default() -> Self {
        Self {
            ip: PLACEHOLDER.to_string(),
            fraud_score: None,
            purity: None,
            is_residential: false,
            is_broadcast: false,
            asn: PLACEHOLDER.to_string(),
            as_organization: PLACEHOLDER.to_string(),
            location: PLACEHOLDER.to_string(),
        }
    }
}

/// Purity classification, higher is cleaner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurityLevel {
    High,
    Medium,
    Low,
}

impl PurityLevel {
    pub fn classify(purity: f64) -> Self {
        if purity >= 85.0 {
            PurityLevel::High
        } else if purity >= 60.0 {
            PurityLevel::Medium
        } else {
            PurityLevel::Low
        }
    }
}

/// Fraud score classification, higher is riskier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn classify(fraud_score: f64) -> Self {
        if fraud_score >= 80.0 {
            RiskLevel::High
        } else if fraud_score >= 50.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for PurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurityLevel::High => write!(f, "高"),
            PurityLevel::Medium => write!(f, "中"),
            PurityLevel::Low => write!(f, "低"),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::High => write!(f, "高风险"),
            RiskLevel::Medium => write!(f, "中风险"),
            RiskLevel::Low => write!(f, "低风险"),
        }
    }
}

/// The structured result handed to a reporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelPayload {
    pub title: String,
    pub content: String,
    pub icon: String,
    #[serde(rename = "icon-color")]
    pub icon_color: String,
}

impl PanelPayload {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            title: PANEL_TITLE.to_string(),
            content: content.into(),
            icon: SUCCESS_ICON.to_string(),
            icon_color: SUCCESS_ICON_COLOR.to_string(),
        }
    }

    /// Builds the one-line failure panel for any error.
    pub fn failure(error: &dyn fmt::Display) -> Self {
        Self {
            title: PANEL_TITLE.to_string(),
            content: format!("请求失败：{}", error),
            icon: FAILURE_ICON.to_string(),
            icon_color: FAILURE_ICON_COLOR.to_string(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.icon == FAILURE_ICON
    }
}

/// Terminal state of one panel run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelOutcome {
    Succeeded,
    Failed,
}
