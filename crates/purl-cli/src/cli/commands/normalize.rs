//! `purl normalize` – remove dot segments from a path.

use anyhow::Result;
use purl_core::config::OutputFormat;
use purl_core::url_model::normalize_path;

use crate::cli::output::emit_value;

pub fn run_normalize(format: OutputFormat, path: &str) -> Result<()> {
    emit_value(format, "path", &normalize_path(path))
}
