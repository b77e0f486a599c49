//! CLI for the PURL URL model.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use purl_core::config::{self, OutputFormat};

use commands::{
    run_complete, run_decode_path, run_encode_path, run_extension, run_name, run_normalize,
    run_origin, run_parse, run_split_location, run_to_path, run_to_url,
};

/// Top-level CLI for purl.
#[derive(Debug, Parser)]
#[command(name = "purl")]
#[command(about = "purl: parse, normalize and resolve URLs and file paths", long_about = None)]
pub struct Cli {
    /// Print results as JSON (overrides the config file).
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decompose a URL into its components.
    Parse {
        /// URL, file path, data:, blob: or about:blank.
        url: String,
    },

    /// Remove `.` and `..` segments from a path.
    Normalize {
        /// Path to normalize.
        path: String,
    },

    /// Resolve an href against a base URL.
    Complete {
        /// Base URL.
        base: String,
        /// Absolute or relative href.
        href: String,
    },

    /// Split a trailing `:line:column` off a location (output is 0-based).
    SplitLocation {
        /// Location such as `app.js:10:5`.
        text: String,
    },

    /// Convert a file-system path to a file:// URL.
    ToUrl {
        /// Raw file-system path.
        path: String,
    },

    /// Convert a file:// URL back to a file-system path.
    ToPath {
        /// file:// URL.
        url: String,
        /// Produce a Windows path (drive letter, backslashes).
        #[arg(long, conflicts_with = "posix")]
        windows: bool,
        /// Produce a POSIX path.
        #[arg(long)]
        posix: bool,
    },

    /// Percent-encode a raw path as a file URL would carry it.
    EncodePath {
        /// Raw path.
        path: String,
    },

    /// Percent-decode an encoded path.
    DecodePath {
        /// Encoded path.
        path: String,
    },

    /// Print the file extension of a URL.
    Extension {
        /// URL or path.
        url: String,
    },

    /// Print the last path segment of a URL.
    Name {
        /// URL or path.
        url: String,
    },

    /// Print the security origin of a URL.
    Origin {
        /// URL.
        url: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let format = if cli.json {
            OutputFormat::Json
        } else {
            cfg.output
        };

        match cli.command {
            CliCommand::Parse { url } => run_parse(format, &url)?,
            CliCommand::Normalize { path } => run_normalize(format, &path)?,
            CliCommand::Complete { base, href } => run_complete(format, &base, &href)?,
            CliCommand::SplitLocation { text } => run_split_location(format, &text)?,
            CliCommand::ToUrl { path } => run_to_url(format, &path)?,
            CliCommand::ToPath {
                url,
                windows,
                posix,
            } => {
                let is_windows = if windows || posix {
                    windows
                } else {
                    cfg.windows_paths()
                };
                run_to_path(format, &url, is_windows)?;
            }
            CliCommand::EncodePath { path } => run_encode_path(format, &path)?,
            CliCommand::DecodePath { path } => run_decode_path(format, &path)?,
            CliCommand::Extension { url } => run_extension(format, &url)?,
            CliCommand::Name { url } => run_name(format, &url)?,
            CliCommand::Origin { url } => run_origin(format, &url)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
