//! `purl complete` – resolve an href against a base URL.

use anyhow::{bail, Result};
use purl_core::config::OutputFormat;
use purl_core::url_model::complete_url;

use crate::cli::output::emit_value;

pub fn run_complete(format: OutputFormat, base: &str, href: &str) -> Result<()> {
    match complete_url(base, href) {
        Some(url) => emit_value(format, "url", &url),
        None => bail!("base URL {:?} is not a valid URL", base),
    }
}
