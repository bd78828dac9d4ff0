//! Catalog seed compiler.
//!
//! Turns a directory of agent markdown files and a directory of skill
//! folders into one SQL artifact of idempotent upserts.
//!
//! # Architecture
//!
//! The compile flow:
//! 1. `compiler` - Discovers agent files and skill directories
//! 2. `metadata` - Derives names, descriptions and classifications
//! 3. `tree` - Serializes each skill directory into `(path, content)` pairs
//! 4. `dependencies` - Infers connector dependencies from skill names
//! 5. `statements` - Renders agent, skill and connector batches
//!
//! # Examples
//!
//! ```no_run
//! use seed_compiler::CatalogCompiler;
//!
//! let catalog = CatalogCompiler::new(".claude/agents", ".claude/skills").compile()?;
//! let artifact = catalog.render("seed.sql")?;
//! println!("{} agents, {} skills", artifact.counts.agents, artifact.counts.skills);
//! # Ok::<(), seed_core::SeedError>(())
//! ```

mod compiler;
pub mod connectors;
mod dependencies;
mod metadata;
mod sql;
mod statements;
mod tree;

pub use compiler::{
    AGENT_INDEX_STEM, Artifact, CatalogCompiler, CatalogCounts, CompiledCatalog, GENERATOR_NAME,
    SkippedFile, run,
};
pub use dependencies::{CONNECTOR_KEYWORDS, infer_dependencies};
pub use metadata::{
    AGENT_TYPES, AgentMetadata, DEFAULT_AGENT_TYPE, DEFAULT_SKILL_CATEGORY,
    FALLBACK_AGENT_DESCRIPTION, MANIFEST_FILE, SKILL_CATEGORIES, SkillMetadata, agent_type,
    extract_agent, extract_skill, first_heading, skill_category,
};
pub use sql::{comment_text, escape_sql_string};
pub use statements::{agent_statements, connector_statements, skill_statements};
pub use tree::{SerializedTree, decode_text, serialize_tree};
