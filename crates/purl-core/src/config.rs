use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the CLI prints results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/purl/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurlConfig {
    /// Output format: "text" (default) or "json".
    #[serde(default)]
    pub output: OutputFormat,
    /// Treat file URLs as Windows paths when converting back to raw paths.
    /// None = follow the host platform.
    #[serde(default)]
    pub windows_paths: Option<bool>,
}

impl PurlConfig {
    /// Platform flag for URL to raw path conversion.
    pub fn windows_paths(&self) -> bool {
        self.windows_paths.unwrap_or(cfg!(windows))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("purl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PurlConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit config file location.
pub fn load_or_init_at(path: &Path) -> Result<PurlConfig> {
    if !path.exists() {
        let default_cfg = PurlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PurlConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
