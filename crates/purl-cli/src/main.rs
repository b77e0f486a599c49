use purl_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Log to the state dir when possible, otherwise stderr.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("purl error: {:#}", err);
        std::process::exit(1);
    }
}
