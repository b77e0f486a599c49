//! `purl split-location` – split `url:line:column`.

use anyhow::Result;
use purl_core::config::OutputFormat;
use purl_core::url_model::split_line_and_column;

use crate::cli::output::emit_record;

pub fn run_split_location(format: OutputFormat, text: &str) -> Result<()> {
    let location = split_line_and_column(text);
    emit_record(format, &serde_json::to_value(&location)?)
}
