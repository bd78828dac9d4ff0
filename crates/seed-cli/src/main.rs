//! Catalog Seed CLI.
//!
//! Compiles agent markdown files and skill directories into a single SQL
//! seed file of idempotent upserts.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `generate` - Compile the catalog and write the seed file
//! - `inspect` - List what would be seeded without writing
//!
//! # Examples
//!
//! ```bash
//! # Default .claude/ layout
//! catalog-seed generate
//!
//! # Pipe straight into psql
//! catalog-seed generate -o - | psql "$DATABASE_URL"
//! ```

use anyhow::Result;
use clap::Parser;
use seed_cli::cli::Cli;
use seed_cli::runner::{execute_command, exit_code_for, init_logging};
use seed_core::cli::{ExitCode, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let output_format = match cli.format.parse::<OutputFormat>() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(ExitCode::INVALID_INPUT.as_i32());
        }
    };

    let exit_code = match execute_command(cli.command, output_format) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code_for(&err)
        }
    };

    std::process::exit(exit_code.as_i32());
}
