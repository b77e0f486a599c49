//! Printing results as text or JSON.

use anyhow::Result;
use purl_core::config::OutputFormat;
use serde_json::Value;

/// Print a single string result.
pub fn emit_value(format: OutputFormat, key: &str, value: &str) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{value}"),
        OutputFormat::Json => {
            let mut obj = serde_json::Map::new();
            obj.insert(key.to_string(), Value::String(value.to_string()));
            println!("{}", serde_json::to_string_pretty(&Value::Object(obj))?);
        }
    }
    Ok(())
}

/// Print a record as `key: value` lines or a JSON object.
pub fn emit_record(format: OutputFormat, record: &Value) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if let Value::Object(fields) = record {
                for (key, value) in fields {
                    println!("{}", text_line(key, value));
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
    }
    Ok(())
}

fn text_line(key: &str, value: &Value) -> String {
    match value {
        Value::String(s) => format!("{key}: {s}"),
        Value::Null => format!("{key}: -"),
        other => format!("{key}: {other}"),
    }
}
