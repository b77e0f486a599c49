//! `purl extension`, `name`, `origin`.

use anyhow::Result;
use purl_core::config::OutputFormat;
use purl_core::url_model::{extract_extension, extract_name, extract_origin};

use crate::cli::output::emit_value;

pub fn run_extension(format: OutputFormat, url: &str) -> Result<()> {
    emit_value(format, "extension", extract_extension(url))
}

pub fn run_name(format: OutputFormat, url: &str) -> Result<()> {
    emit_value(format, "name", extract_name(url))
}

pub fn run_origin(format: OutputFormat, url: &str) -> Result<()> {
    emit_value(format, "origin", &extract_origin(url))
}
