//! Metadata extraction from agent files and skill directories.
//!
//! Extraction is deliberately shallow. The description is the first line
//! that starts with `"# "`; front matter, lower heading levels, and
//! everything else in the document are ignored. Classification is an
//! exact-match lookup in a static table with a fixed default.
//!
//! Nothing in this module fails on malformed input. A missing manifest,
//! an empty file, or a file with no heading all produce the fallback
//! description.

use crate::tree::decode_text;
use std::fs;
use std::path::Path;

/// Manifest file read for a skill's description.
pub const MANIFEST_FILE: &str = "SKILL.md";

/// Description used for agents without a top-level heading.
pub const FALLBACK_AGENT_DESCRIPTION: &str = "AI development agent";

/// Type for agents missing from [`AGENT_TYPES`].
pub const DEFAULT_AGENT_TYPE: &str = "generic";

/// Category for skills missing from [`SKILL_CATEGORIES`].
pub const DEFAULT_SKILL_CATEGORY: &str = "development";

/// Agent name to agent type.
pub const AGENT_TYPES: &[(&str, &str)] = &[
    ("go-backend-developer", "claude-code"),
    ("frontend-developer", "claude-code"),
    ("coordinator", "claude-code"),
    ("tech-lead", "claude-code"),
    ("product-strategist", "claude-code"),
    ("pr-reviewer", "claude-code"),
];

/// Skill name to skill category.
pub const SKILL_CATEGORIES: &[(&str, &str)] = &[
    ("release-manager", "devops"),
    ("github-task-manager", "workflow"),
    ("github-dev-workflow", "workflow"),
    ("github-pr-workflow", "workflow"),
];

/// Metadata derived from an agent file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentMetadata {
    /// File stem.
    pub name: String,
    /// First top-level heading, or [`FALLBACK_AGENT_DESCRIPTION`].
    pub description: String,
    /// Entry from [`AGENT_TYPES`], or [`DEFAULT_AGENT_TYPE`].
    pub agent_type: &'static str,
}

/// Metadata derived from a skill directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillMetadata {
    /// Directory name.
    pub name: String,
    /// First top-level heading of the manifest, or `Skill: <name>`.
    pub description: String,
    /// Entry from [`SKILL_CATEGORIES`], or [`DEFAULT_SKILL_CATEGORY`].
    pub category: &'static str,
}

/// Returns the text of the first `"# "` heading line, trimmed.
///
/// Lines are split on `\n` only, so a trailing `\r` is removed by the trim.
///
/// # Examples
///
/// ```
/// use seed_compiler::first_heading;
///
/// assert_eq!(first_heading("intro\n# Title \n# Second").as_deref(), Some("Title"));
/// assert_eq!(first_heading("## Not top level"), None);
/// ```
#[must_use]
pub fn first_heading(content: &str) -> Option<String> {
    content
        .split('\n')
        .find_map(|line| line.strip_prefix("# "))
        .map(|heading| heading.trim().to_string())
}

/// Looks up an agent's type, falling back to [`DEFAULT_AGENT_TYPE`].
#[must_use]
pub fn agent_type(name: &str) -> &'static str {
    lookup(AGENT_TYPES, name).unwrap_or(DEFAULT_AGENT_TYPE)
}

/// Looks up a skill's category, falling back to [`DEFAULT_SKILL_CATEGORY`].
#[must_use]
pub fn skill_category(name: &str) -> &'static str {
    lookup(SKILL_CATEGORIES, name).unwrap_or(DEFAULT_SKILL_CATEGORY)
}

fn lookup(table: &[(&str, &'static str)], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}

/// Extracts metadata from an agent file whose content is already loaded.
///
/// # Examples
///
/// ```
/// use seed_compiler::extract_agent;
/// use std::path::Path;
///
/// let meta = extract_agent(Path::new("agents/tech-lead.md"), "# Tech Lead Agent\n");
/// assert_eq!(meta.name, "tech-lead");
/// assert_eq!(meta.description, "Tech Lead Agent");
/// assert_eq!(meta.agent_type, "claude-code");
/// ```
#[must_use]
pub fn extract_agent(path: &Path, content: &str) -> AgentMetadata {
    let name = file_stem(path);
    let description =
        first_heading(content).unwrap_or_else(|| FALLBACK_AGENT_DESCRIPTION.to_string());
    let agent_type = agent_type(&name);

    AgentMetadata {
        name,
        description,
        agent_type,
    }
}

/// Extracts metadata from a skill directory.
///
/// Reads [`MANIFEST_FILE`] if it exists and decodes as UTF-8; any failure
/// to do so falls back to `Skill: <name>`.
#[must_use]
pub fn extract_skill(dir: &Path) -> SkillMetadata {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let description = read_manifest(dir)
        .as_deref()
        .and_then(first_heading)
        .unwrap_or_else(|| format!("Skill: {name}"));
    let category = skill_category(&name);

    SkillMetadata {
        name,
        description,
        category,
    }
}

fn read_manifest(dir: &Path) -> Option<String> {
    let manifest = dir.join(MANIFEST_FILE);
    if !manifest.is_file() {
        return None;
    }
    match fs::read(&manifest) {
        Ok(bytes) => decode_text(bytes),
        Err(e) => {
            tracing::debug!("Unreadable manifest {}: {}", manifest.display(), e);
            None
        }
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
