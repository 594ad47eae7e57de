//! Validation of raw model output against the active response contract.

use notify_core::{bind_value, NotifyError, Rendered, SummaryContract};
use serde_json::Value;

use crate::config::SummaryStyle;

/// Turn raw model text into a rendered notification.
///
/// Free-text styles pass the text through untouched. The structured style
/// requires a single JSON object with exactly the six summary fields; any
/// deviation is a [`NotifyError::ContractViolation`].
pub fn parse_response(raw: &str, style: SummaryStyle) -> Result<Rendered, NotifyError> {
    if style.is_structured() {
        parse_summary(raw).map(Rendered::Structured)
    } else {
        Ok(Rendered::plain(raw))
    }
}

/// Parse and bind a structured summary.
pub fn parse_summary(raw: &str) -> Result<SummaryContract, NotifyError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| NotifyError::ContractViolation(format!("model output is not valid JSON: {}", e)))?;

    bind_value(value).map_err(|e| NotifyError::ContractViolation(e.to_string()))
}
