//! Compiler driver.
//!
//! Discovers agents and skills, builds their records, and renders the
//! combined seed artifact. The artifact is assembled entirely in memory;
//! [`Artifact::write_to`] persists it in a single write.
//!
//! # Discovery
//!
//! - Agents: `*.md` files directly under the agents root, minus
//!   `README.md`, in file-name order.
//! - Skills: immediate subdirectories of the skills root, in name order.
//!   Deeper directories belong to their parent skill.

use crate::connectors::CONNECTORS;
use crate::dependencies::infer_dependencies;
use crate::metadata::{extract_agent, extract_skill};
use crate::sql::comment_text;
use crate::statements::{agent_statements, connector_statements, skill_statements};
use crate::tree::{decode_text, serialize_tree};
use seed_core::{AgentRecord, GeneratorDefaults, Result, SeedError, SkillRecord};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Stem of the agents-root file that documents the directory.
pub const AGENT_INDEX_STEM: &str = "README";

/// Name recorded as the artifact's generator.
pub const GENERATOR_NAME: &str = "catalog-seed";

/// A file left out of the catalog because it is not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    /// Agent name or skill name the file belongs to.
    pub owner: String,
    /// Path relative to the owner's root.
    pub path: String,
}

/// Records discovered in one compile run.
#[derive(Debug, Clone, Default)]
pub struct CompiledCatalog {
    /// Agents in discovery order.
    pub agents: Vec<AgentRecord>,
    /// Skills in discovery order.
    pub skills: Vec<SkillRecord>,
    /// Files omitted by the skip-on-decode-failure rule.
    pub skipped: Vec<SkippedFile>,
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogCounts {
    /// Agent records.
    pub agents: usize,
    /// Skill records.
    pub skills: usize,
    /// Connector entries.
    pub connectors: usize,
    /// Files skipped as undecodable.
    pub skipped_files: usize,
}

/// Rendered seed artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Full SQL text.
    pub sql: String,
    /// Record counts written into the header.
    pub counts: CatalogCounts,
}

impl Artifact {
    /// Writes the artifact to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Io`] if the directory cannot be created or the
    /// file cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| SeedError::io(parent, e))?;
        }
        fs::write(path, &self.sql).map_err(|e| SeedError::io(path, e))?;
        tracing::info!("Generated: {}", path.display());
        Ok(())
    }
}

/// Compiles an agents root and a skills root into catalog records.
///
/// # Examples
///
/// ```no_run
/// use seed_compiler::CatalogCompiler;
///
/// let catalog = CatalogCompiler::new(".claude/agents", ".claude/skills").compile()?;
/// let artifact = catalog.render("shared/schema/seeds/002_claude_config.sql")?;
/// artifact.write_to("shared/schema/seeds/002_claude_config.sql".as_ref())?;
/// # Ok::<(), seed_core::SeedError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogCompiler {
    agents_dir: PathBuf,
    skills_dir: PathBuf,
    defaults: GeneratorDefaults,
}

impl CatalogCompiler {
    /// Creates a compiler with [`GeneratorDefaults::default`].
    pub fn new(agents_dir: impl Into<PathBuf>, skills_dir: impl Into<PathBuf>) -> Self {
        Self {
            agents_dir: agents_dir.into(),
            skills_dir: skills_dir.into(),
            defaults: GeneratorDefaults::default(),
        }
    }

    /// Replaces the provider, model and version defaults.
    #[must_use]
    pub fn with_defaults(mut self, defaults: GeneratorDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Discovers and builds every record.
    ///
    /// Both roots are checked before anything is read.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::DirectoryNotFound`] if either root is missing,
    /// or [`SeedError::Io`] if a directory or file cannot be read.
    pub fn compile(&self) -> Result<CompiledCatalog> {
        require_dir(&self.agents_dir)?;
        require_dir(&self.skills_dir)?;

        let mut catalog = CompiledCatalog::default();
        self.collect_agents(&mut catalog)?;
        tracing::info!("Found {} agents", catalog.agents.len());

        self.collect_skills(&mut catalog)?;
        tracing::info!("Found {} skills", catalog.skills.len());

        Ok(catalog)
    }

    fn collect_agents(&self, catalog: &mut CompiledCatalog) -> Result<()> {
        for path in agent_files(&self.agents_dir)? {
            let bytes = fs::read(&path).map_err(|e| SeedError::io(&path, e))?;
            let Some(content) = decode_text(bytes) else {
                tracing::warn!("Skipping non-UTF-8 agent file: {}", path.display());
                catalog.skipped.push(SkippedFile {
                    owner: file_name(&path),
                    path: file_name(&path),
                });
                continue;
            };

            let meta = extract_agent(&path, &content);
            tracing::debug!("Agent {} ({}): {}", meta.name, meta.agent_type, meta.description);

            catalog.agents.push(AgentRecord {
                name: meta.name,
                agent_type: meta.agent_type.to_string(),
                description: meta.description,
                content,
                provider: self.defaults.provider.clone(),
                llm_provider: self.defaults.llm_provider.clone(),
                llm_model: self.defaults.llm_model.clone(),
            });
        }
        Ok(())
    }

    fn collect_skills(&self, catalog: &mut CompiledCatalog) -> Result<()> {
        for dir in skill_dirs(&self.skills_dir)? {
            let tree = serialize_tree(&dir)?;
            let meta = extract_skill(&dir);
            let dependencies = infer_dependencies(&meta.name);

            tracing::debug!(
                "Skill {} ({}): {} files, {} skipped",
                meta.name,
                meta.category,
                tree.files.len(),
                tree.skipped.len()
            );

            catalog
                .skipped
                .extend(tree.skipped.into_iter().map(|path| SkippedFile {
                    owner: meta.name.clone(),
                    path,
                }));

            catalog.skills.push(SkillRecord {
                name: meta.name,
                description: meta.description,
                category: meta.category.to_string(),
                version: self.defaults.skill_version.clone(),
                files: tree.files,
                dependencies,
            });
        }
        Ok(())
    }
}

impl CompiledCatalog {
    /// Returns the counts recorded in the artifact header.
    #[must_use]
    pub fn counts(&self) -> CatalogCounts {
        CatalogCounts {
            agents: self.agents.len(),
            skills: self.skills.len(),
            connectors: CONNECTORS.len(),
            skipped_files: self.skipped.len(),
        }
    }

    /// Renders the full artifact: header, agents, skills, connectors.
    ///
    /// `target` is the path shown in the header's `psql` hint. The output
    /// depends only on the records and `target`, so an unchanged source
    /// tree renders byte-identical text.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Serialization`] if a skill cannot be encoded.
    pub fn render(&self, target: &str) -> Result<Artifact> {
        let counts = self.counts();

        let mut sql = header(&counts, target);
        sql.push_str(&agent_statements(&self.agents));
        sql.push('\n');
        sql.push_str(&skill_statements(&self.skills)?);
        sql.push('\n');
        sql.push_str(&connector_statements(CONNECTORS));

        Ok(Artifact { sql, counts })
    }
}

/// Compiles both roots and renders the artifact in one call.
///
/// # Errors
///
/// See [`CatalogCompiler::compile`] and [`CompiledCatalog::render`].
pub fn run(agents_dir: &Path, skills_dir: &Path, target: &str) -> Result<Artifact> {
    CatalogCompiler::new(agents_dir, skills_dir)
        .compile()?
        .render(target)
}

fn header(counts: &CatalogCounts, target: &str) -> String {
    [
        "-- Seed Data: Claude Code Configuration".to_string(),
        "-- Auto-generated from .claude/ directory".to_string(),
        format!("-- Agents: {}, Skills: {}", counts.agents, counts.skills),
        format!("-- Generated by: {GENERATOR_NAME}"),
        "--".to_string(),
        "-- This file imports real agent and skill configurations from the project.".to_string(),
        format!("-- Run with: psql $DATABASE_URL -f {}", comment_text(target)),
        String::new(),
        String::new(),
    ]
    .join("\n")
}

fn require_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(SeedError::DirectoryNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Sorted entries of `dir` matching `keep`.
fn sorted_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| SeedError::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| SeedError::io(dir, e))?.path();
        if keep(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn agent_files(dir: &Path) -> Result<Vec<PathBuf>> {
    sorted_entries(dir, |path| {
        path.is_file()
            && path.extension().is_some_and(|ext| ext == "md")
            && path.file_stem().is_none_or(|stem| stem != AGENT_INDEX_STEM)
    })
}

fn skill_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    sorted_entries(dir, Path::is_dir)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
