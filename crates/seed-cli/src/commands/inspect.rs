//! Inspect command implementation.
//!
//! Compiles the catalog and prints what would be seeded, without writing
//! any SQL.

use crate::cli::SourceArgs;
use crate::config::SeedConfig;
use crate::formatters::format_output;
use anyhow::{Context, Result};
use seed_compiler::{CatalogCompiler, CompiledCatalog, SkippedFile, connectors::CONNECTORS};
use seed_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;

/// Everything the compiler discovered.
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Agents root that was scanned
    pub agents_dir: String,
    /// Skills root that was scanned
    pub skills_dir: String,
    /// Discovered agents
    pub agents: Vec<AgentSummary>,
    /// Discovered skills
    pub skills: Vec<SkillSummary>,
    /// Constant connector entries
    pub connectors: Vec<&'static str>,
    /// Files omitted because they are not UTF-8
    pub skipped_files: Vec<SkippedFile>,
}

/// Summary of an agent record.
#[derive(Debug, Serialize)]
pub struct AgentSummary {
    /// Agent name
    pub name: String,
    /// Agent type
    #[serde(rename = "type")]
    pub agent_type: String,
    /// Agent description
    pub description: String,
    /// Source size in bytes
    pub content_bytes: usize,
}

/// Summary of a skill record.
#[derive(Debug, Serialize)]
pub struct SkillSummary {
    /// Skill name
    pub name: String,
    /// Skill description
    pub description: String,
    /// Skill category
    pub category: String,
    /// Number of serialized files
    pub file_count: usize,
    /// Required connectors
    pub connectors: Vec<String>,
}

impl InspectResult {
    fn new(config: &SeedConfig, catalog: CompiledCatalog) -> Self {
        let agents = catalog
            .agents
            .into_iter()
            .map(|a| AgentSummary {
                content_bytes: a.content.len(),
                name: a.name,
                agent_type: a.agent_type,
                description: a.description,
            })
            .collect();

        let skills = catalog
            .skills
            .into_iter()
            .map(|s| SkillSummary {
                file_count: s.files.len(),
                connectors: s.dependencies.connectors.into_iter().collect(),
                name: s.name,
                description: s.description,
                category: s.category,
            })
            .collect();

        Self {
            agents_dir: config.paths.agents_dir.display().to_string(),
            skills_dir: config.paths.skills_dir.display().to_string(),
            agents,
            skills,
            connectors: CONNECTORS.iter().map(|c| c.name).collect(),
            skipped_files: catalog.skipped,
        }
    }
}

/// Runs the inspect command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the catalog
/// cannot be compiled.
pub fn run(sources: &SourceArgs, output_format: OutputFormat) -> Result<ExitCode> {
    let result = inspect(sources)?;
    println!("{}", format_output(&result, output_format)?);
    Ok(ExitCode::SUCCESS)
}

/// Compiles the catalog described by `sources` into an [`InspectResult`].
///
/// # Errors
///
/// See [`run`].
pub fn inspect(sources: &SourceArgs) -> Result<InspectResult> {
    let config = SeedConfig::resolve(sources).context("failed to load configuration")?;

    let catalog = CatalogCompiler::new(&config.paths.agents_dir, &config.paths.skills_dir)
        .with_defaults(config.defaults.clone())
        .compile()
        .context("failed to compile catalog")?;

    Ok(InspectResult::new(&config, catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_inspect_summarizes_records() {
        let temp = TempDir::new().unwrap();
        let agents = temp.path().join("agents");
        let skills = temp.path().join("skills");
        fs::create_dir_all(&agents).unwrap();
        fs::create_dir_all(skills.join("github-task-manager")).unwrap();
        fs::write(agents.join("pr-reviewer.md"), "# PR Reviewer\n").unwrap();
        fs::write(skills.join("github-task-manager/SKILL.md"), "# Tasks\n").unwrap();

        let sources = SourceArgs {
            agents_dir: Some(agents),
            skills_dir: Some(skills.clone()),
            config: None,
        };
        let result = inspect(&sources).unwrap();

        assert_eq!(result.agents.len(), 1);
        assert_eq!(result.agents[0].agent_type, "claude-code");
        assert_eq!(result.agents[0].description, "PR Reviewer");
        assert_eq!(result.skills[0].category, "workflow");
        assert_eq!(result.skills[0].file_count, 1);
        assert_eq!(result.skills[0].connectors, vec!["github".to_string()]);
        assert_eq!(result.connectors, vec!["Playwright", "GitHub"]);

        // Nothing is written next to the sources.
        assert!(!skills.join("../seed.sql").exists());
    }

    #[test]
    fn test_inspect_missing_root_fails() {
        let temp = TempDir::new().unwrap();
        let sources = SourceArgs {
            agents_dir: Some(temp.path().join("agents")),
            skills_dir: Some(temp.path().join("skills")),
            config: None,
        };
        assert!(inspect(&sources).is_err());
    }
}
