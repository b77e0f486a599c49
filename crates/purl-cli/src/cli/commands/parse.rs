//! `purl parse` – decompose a URL.

use anyhow::Result;
use purl_core::config::OutputFormat;
use purl_core::ParsedUrl;
use serde_json::Value;

use crate::cli::output::emit_record;

/// Structured fields plus the derived names a UI would show.
pub(crate) fn parse_record(url: &str) -> Result<Value> {
    let parsed = ParsedUrl::parse(url);
    let mut record = serde_json::to_value(&parsed)?;
    if let Value::Object(fields) = &mut record {
        fields.insert(
            "display_name".to_string(),
            Value::String(parsed.display_name().to_string()),
        );
        if parsed.is_valid() || parsed.is_data_url() {
            fields.insert(
                "security_origin".to_string(),
                Value::String(parsed.security_origin()),
            );
        }
    }
    Ok(record)
}

pub fn run_parse(format: OutputFormat, url: &str) -> Result<()> {
    let record = parse_record(url)?;
    tracing::debug!(url, "parsed");
    emit_record(format, &record)
}
