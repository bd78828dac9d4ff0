//! Generate command implementation.
//!
//! Compiles the catalog and writes the SQL seed file:
//! 1. Resolves directories and defaults from flags and configuration
//! 2. Compiles agents and skills into records
//! 3. Renders the artifact in memory
//! 4. Writes it once, to a file or stdout

use crate::cli::SourceArgs;
use crate::config::SeedConfig;
use crate::formatters::format_output;
use anyhow::{Context, Result};
use seed_compiler::{CatalogCompiler, SkippedFile};
use seed_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Output value that sends the artifact to stdout.
pub const STDOUT_TARGET: &str = "-";

/// Path shown in the header's `psql` hint when writing to stdout.
const STDOUT_HINT: &str = "<seed-file>.sql";

/// Result of a generate run.
#[derive(Debug, Serialize)]
pub struct GenerationResult {
    /// Where the artifact was written
    pub output: String,
    /// Number of agent records
    pub agents: usize,
    /// Number of skill records
    pub skills: usize,
    /// Number of connector entries
    pub connectors: usize,
    /// Size of the artifact in bytes
    pub bytes: usize,
    /// Files omitted because they are not UTF-8
    pub skipped_files: Vec<SkippedFile>,
}

/// Runs the generate command.
///
/// # Arguments
///
/// * `sources` - Source directories and configuration file
/// * `output` - Output file override, `-` for stdout
/// * `output_format` - Summary format (json, text, pretty)
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be read or parsed
/// - Either source root does not exist
/// - A source file cannot be read
/// - The artifact cannot be written
///
/// Nothing is written when any step before the final write fails.
pub fn run(
    sources: &SourceArgs,
    output: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let config = SeedConfig::resolve(sources).context("failed to load configuration")?;
    let output = output.unwrap_or_else(|| config.paths.output.clone());
    let to_stdout = is_stdout(&output);

    info!(
        "Compiling agents from {} and skills from {}",
        config.paths.agents_dir.display(),
        config.paths.skills_dir.display()
    );

    let catalog = CatalogCompiler::new(&config.paths.agents_dir, &config.paths.skills_dir)
        .with_defaults(config.defaults.clone())
        .compile()
        .context("failed to compile catalog")?;

    let target = if to_stdout {
        STDOUT_HINT.to_string()
    } else {
        output.display().to_string()
    };
    let artifact = catalog
        .render(&target)
        .context("failed to render seed artifact")?;

    if to_stdout {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(artifact.sql.as_bytes())
            .context("failed to write artifact to stdout")?;
        stdout.flush()?;
    } else {
        artifact
            .write_to(&output)
            .with_context(|| format!("failed to write {}", output.display()))?;
    }

    info!("  - {} agents", artifact.counts.agents);
    info!("  - {} skills", artifact.counts.skills);
    info!("  - {} MCP servers", artifact.counts.connectors);

    let result = GenerationResult {
        output: if to_stdout {
            "stdout".to_string()
        } else {
            output.display().to_string()
        },
        agents: artifact.counts.agents,
        skills: artifact.counts.skills,
        connectors: artifact.counts.connectors,
        bytes: artifact.sql.len(),
        skipped_files: catalog.skipped,
    };

    report(&result, output_format, to_stdout)?;
    Ok(ExitCode::SUCCESS)
}

/// Prints the summary, on stderr when stdout carries the artifact.
fn report(result: &GenerationResult, output_format: OutputFormat, to_stdout: bool) -> Result<()> {
    let summary = format_output(result, output_format)?;
    if to_stdout {
        eprintln!("{summary}");
    } else {
        println!("{summary}");
    }
    Ok(())
}

/// Returns `true` if `path` names the stdout target.
#[must_use]
pub fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == STDOUT_TARGET
}
