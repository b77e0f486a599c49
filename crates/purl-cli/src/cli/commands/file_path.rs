//! `purl to-url`, `to-path`, `encode-path`, `decode-path` – file path conversions.

use anyhow::{Context, Result};
use purl_core::config::OutputFormat;
use purl_core::url_model::{
    encoded_path_to_raw_path_string, raw_path_to_encoded_path_string, raw_path_to_url_string,
    url_to_raw_path_string,
};

use crate::cli::output::emit_value;

pub fn run_to_url(format: OutputFormat, path: &str) -> Result<()> {
    let url = raw_path_to_url_string(path).with_context(|| format!("convert {path:?}"))?;
    emit_value(format, "url", &url)
}

pub fn run_to_path(format: OutputFormat, url: &str, is_windows: bool) -> Result<()> {
    emit_value(format, "path", &url_to_raw_path_string(url, is_windows))
}

pub fn run_encode_path(format: OutputFormat, path: &str) -> Result<()> {
    let encoded =
        raw_path_to_encoded_path_string(path).with_context(|| format!("encode {path:?}"))?;
    emit_value(format, "path", &encoded)
}

pub fn run_decode_path(format: OutputFormat, path: &str) -> Result<()> {
    emit_value(format, "path", &encoded_path_to_raw_path_string(path))
}
