//! CLI argument definitions and parsing.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands
//! - `SourceArgs` - Source directories and configuration shared by subcommands

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Catalog Seed - compile agent and skill definitions into SQL seed data.
///
/// Reads agent markdown files and skill directories and writes one SQL file
/// of idempotent upserts that can be applied with `psql` any number of times.
#[derive(Parser, Debug)]
#[command(name = "catalog-seed")]
#[command(version, about, long_about = None)]
#[command(author = "Catalog Seed Team")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Summary output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

/// Source locations shared by every subcommand.
///
/// Flags win over the configuration file, which wins over built-in defaults.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceArgs {
    /// Directory of agent markdown files (default: .claude/agents)
    #[arg(long)]
    pub agents_dir: Option<PathBuf>,

    /// Directory of skill folders (default: .claude/skills)
    #[arg(long)]
    pub skills_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, env = "CATALOG_SEED_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile the catalog and write the SQL seed file.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Default layout
    /// catalog-seed generate
    ///
    /// # Custom roots, SQL to stdout
    /// catalog-seed generate --agents-dir defs/agents --skills-dir defs/skills -o -
    /// ```
    Generate {
        /// Source directories and configuration
        #[command(flatten)]
        sources: SourceArgs,

        /// Output file, or `-` for stdout
        /// (default: shared/schema/seeds/002_claude_config.sql)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compile the catalog and list the discovered records without writing.
    Inspect {
        /// Source directories and configuration
        #[command(flatten)]
        sources: SourceArgs,
    },
}
