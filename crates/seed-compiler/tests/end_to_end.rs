//! End-to-end tests for catalog compilation.
//!
//! These tests build a small `.claude/` style tree on disk and check the
//! rendered artifact as a whole.

use seed_compiler::{CatalogCompiler, run};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes `content` to `root/rel`, creating parent directories.
fn write(root: &Path, rel: &str, content: impl AsRef<[u8]>) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("path has parent")).expect("create parent");
    fs::write(path, content).expect("write fixture");
}

/// Creates the reference tree: one agent and one skill with a script.
fn reference_tree() -> (TempDir, PathBuf, PathBuf) {
    let temp = TempDir::new().expect("failed to create temp dir");
    let agents = temp.path().join("agents");
    let skills = temp.path().join("skills");

    write(
        &agents,
        "tech-lead.md",
        "# Tech Lead Agent\n\nYou coordinate the team's technical decisions.\n",
    );
    write(
        &skills,
        "release-manager/SKILL.md",
        "# Release Manager\n\nCut releases.\n",
    );
    write(
        &skills,
        "release-manager/scripts/run.sh",
        "#!/bin/sh\necho 'releasing'\n",
    );

    (temp, agents, skills)
}

#[test]
fn test_reference_scenario() {
    let (_temp, agents, skills) = reference_tree();

    let artifact = run(&agents, &skills, "seed.sql").expect("compile succeeds");
    let sql = &artifact.sql;

    assert_eq!(artifact.counts.agents, 1);
    assert_eq!(artifact.counts.skills, 1);
    assert!(sql.contains("-- Agents: 1, Skills: 1"));

    // Exactly one agent upsert for tech-lead.
    assert_eq!(sql.matches("INSERT INTO agents").count(), 1);
    assert!(sql.contains("-- Agent: tech-lead"));
    assert!(sql.contains("    'tech-lead',\n    'claude-code',\n    'Tech Lead Agent',"));

    // Agent content is carried by the assignment update, escaped.
    assert!(sql.contains("You coordinate the team''s technical decisions."));

    // Exactly one skill upsert for release-manager.
    assert_eq!(sql.matches("INSERT INTO skill_catalog").count(), 1);
    assert!(sql.contains("-- Skill: release-manager (2 files)"));
    assert!(sql.contains(
        "    'release-manager',\n    'Release Manager',\n    'devops',\n    '1.0.0',"
    ));
    assert!(sql.contains(r#""path":"SKILL.md""#));
    assert!(sql.contains(r#""path":"scripts/run.sh""#));
    assert!(sql.contains(r"echo ''releasing''\n"));
    assert!(sql.contains(r#"'{"mcp_servers":[],"skills":[]}'::JSONB"#));
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let (_temp, agents, skills) = reference_tree();
    write(&skills, "github-pr-workflow/SKILL.md", "# PR Workflow\n");
    write(&skills, "github-pr-workflow/assets/icon.png", [0x89u8, 0xff, 0x00]);
    write(&agents, "coordinator.md", "no heading\n");

    let first = run(&agents, &skills, "seed.sql").expect("first run");
    let second = run(&agents, &skills, "seed.sql").expect("second run");
    assert_eq!(first.sql, second.sql);
}

#[test]
fn test_github_skill_gets_connector_dependency() {
    let (_temp, agents, skills) = reference_tree();
    write(&skills, "github-pr-workflow/SKILL.md", "# PR Workflow\n");

    let catalog = CatalogCompiler::new(&agents, &skills)
        .compile()
        .expect("compile succeeds");

    let github = catalog
        .skills
        .iter()
        .find(|s| s.name == "github-pr-workflow")
        .expect("skill discovered");
    assert_eq!(github.category, "workflow");
    assert!(github.dependencies.connectors.contains("github"));

    let release = catalog
        .skills
        .iter()
        .find(|s| s.name == "release-manager")
        .expect("skill discovered");
    assert!(release.dependencies.connectors.is_empty());

    let sql = catalog.render("seed.sql").expect("render").sql;
    assert!(sql.contains(r#"'{"mcp_servers":["github"],"skills":[]}'::JSONB"#));
}

#[test]
fn test_binary_skill_assets_never_appear() {
    let (_temp, agents, skills) = reference_tree();
    write(&skills, "release-manager/assets/logo.png", [0xffu8, 0xd8, 0xff, 0xe0]);

    let catalog = CatalogCompiler::new(&agents, &skills)
        .compile()
        .expect("compile succeeds");

    let files: Vec<_> = catalog.skills[0]
        .files
        .iter()
        .map(|f| f.path.as_str())
        .collect();
    assert_eq!(files, vec!["SKILL.md", "scripts/run.sh"]);
    assert_eq!(catalog.skipped.len(), 1);
    assert_eq!(catalog.skipped[0].owner, "release-manager");
    assert_eq!(catalog.skipped[0].path, "assets/logo.png");

    let artifact = catalog.render("seed.sql").expect("render");
    assert!(!artifact.sql.contains("logo.png"));
    assert_eq!(artifact.counts.skipped_files, 1);
}

#[test]
fn test_fallbacks_end_to_end() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let agents = temp.path().join("agents");
    let skills = temp.path().join("skills");
    write(&agents, "data-scientist.md", "## Only a subheading\n");
    write(&skills, "docs-writer/guide.md", "# Guide\n");

    let catalog = CatalogCompiler::new(&agents, &skills)
        .compile()
        .expect("compile succeeds");

    assert_eq!(catalog.agents[0].description, "AI development agent");
    assert_eq!(catalog.agents[0].agent_type, "generic");
    assert_eq!(catalog.skills[0].description, "Skill: docs-writer");
    assert_eq!(catalog.skills[0].category, "development");
}

#[test]
fn test_missing_root_writes_nothing() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let agents = temp.path().join("agents");
    fs::create_dir(&agents).expect("create agents");

    let result = run(&agents, &temp.path().join("skills"), "seed.sql");
    assert!(result.expect_err("missing skills root").is_not_found());
}
