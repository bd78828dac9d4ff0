//! Command execution and runtime logic.
//!
//! Contains command dispatch, logging initialization, and the mapping from
//! errors to process exit codes.

use anyhow::Result;
use seed_core::SeedError;
use seed_core::cli::{ExitCode, OutputFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Commands;
use crate::commands;

/// Initializes logging infrastructure.
///
/// Logs go to stderr so that `generate -o -` can stream SQL on stdout.
/// `RUST_LOG` is honored unless `--verbose` forces debug level.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Executes the specified CLI command.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate { sources, output } => {
            commands::generate::run(&sources, output, output_format)
        }
        Commands::Inspect { sources } => commands::inspect::run(&sources, output_format),
    }
}

/// Picks the exit code for a failed command.
///
/// Compiler errors keep their meaning through `anyhow` context layers;
/// anything else is a generic failure.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.downcast_ref::<SeedError>()
        .map_or(ExitCode::ERROR, ExitCode::for_error)
}
