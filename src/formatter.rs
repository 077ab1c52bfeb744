//! Formatter Module
//!
//! This module turns the raw IPPure response body into an [`IpInfo`] and renders
//! the six-line panel summary. Missing or malformed fields fall back to
//! placeholders; only a body that is not valid JSON is an error.
use crate::error::Result;
use crate::models::{IpInfo, PurityLevel, RiskLevel, PLACEHOLDER};
use serde_json::{Map, Value};

/// Parses the response body. An empty body counts as `{}`.
pub fn parse_body(body: &str) -> Result<IpInfo> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(IpInfo::default());
    }
    let value: Value = serde_json::from_str(trimmed)?;
    match value.as_object() {
        Some(data) => Ok(IpInfo::from_fields(data)),
        None => {
            log::debug!("Response body is JSON but not an object, using placeholders");
            Ok(IpInfo::default())
        }
    }
}

impl IpInfo {
    /// Extracts every field from a decoded JSON object, degrading bad values to placeholders.
    pub fn from_fields(data: &Map<String, Value>) -> Self {
        let fraud_score = data
            .get("fraudScore")
            .and_then(numeric_value)
            .filter(|n| n.is_finite() && (0.0..=100.0).contains(n));
        let purity = fraud_score.map(|score| (100.0 - score).clamp(0.0, 100.0));

        let location = ["country", "region", "city"]
            .iter()
            .filter_map(|key| non_empty_str(data, key))
            .collect::<Vec<_>>()
            .join(" / ");

        Self {
            ip: non_empty_str(data, "ip").unwrap_or(PLACEHOLDER).to_string(),
            fraud_score,
            purity,
            is_residential: data.get("isResidential") == Some(&Value::Bool(true)),
            is_broadcast: data.get("isBroadcast") == Some(&Value::Bool(true)),
            asn: format_asn(data.get("asn")),
            as_organization: non_empty_str(data, "asOrganization")
                .unwrap_or(PLACEHOLDER)
                .to_string(),
            location: if location.is_empty() {
                PLACEHOLDER.to_string()
            } else {
                location
            },
        }
    }
}

fn non_empty_str<'a>(data: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    data.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

// Numbers and numeric strings such as "42"; anything else is not a score.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn format_asn(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if f.is_finite() => format!("AS{}", format_number(f)),
            _ => format!("AS{}", n),
        },
        Some(Value::String(s)) if !s.is_empty() => format!("AS{}", s),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Renders a number the way a panel user expects: `90`, not `90.0`.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Renders the six summary lines in display order.
pub fn render_lines(info: &IpInfo) -> [String; 6] {
    let purity_line = match info.purity {
        Some(purity) => format!(
            "纯净度：{}/100（{}）",
            format_number(purity),
            PurityLevel::classify(purity)
        ),
        None => format!("纯净度：{}", PLACEHOLDER),
    };

    let risk_line = match info.fraud_score {
        Some(score) => format!(
            "风险评分：{}/100（{}）",
            format_number(score),
            RiskLevel::classify(score)
        ),
        None => format!("风险评分：{}", PLACEHOLDER),
    };

    let kind = if info.is_residential { "住宅" } else { "机房/非住宅" };
    let broadcast = if info.is_broadcast { " / 广播" } else { "" };

    [
        purity_line,
        risk_line,
        format!("类型：{}{}", kind, broadcast),
        format!("IP：{}", info.ip),
        format!("ASN：{} · {}", info.asn, info.as_organization),
        format!("位置：{}", info.location),
    ]
}

/// Parses the body and joins the summary lines with newlines.
pub fn format_summary(body: &str) -> Result<String> {
    let info = parse_body(body)?;
    Ok(render_lines(&info).join("\n"))
}
