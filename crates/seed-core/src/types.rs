//! Catalog record types.
//!
//! Records are built once per source file or directory, consumed by the
//! statement generator, and dropped at the end of the run:
//! - `AgentRecord`: one markdown file under the agents root
//! - `SkillRecord`: one immediate subdirectory of the skills root
//! - `CatalogEntry`: a hand-written connector descriptor

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Provider and model identifiers stamped onto every generated record.
///
/// # Examples
///
/// ```
/// use seed_core::GeneratorDefaults;
///
/// let defaults = GeneratorDefaults::default();
/// assert_eq!(defaults.provider, "anthropic");
/// assert_eq!(defaults.skill_version, "1.0.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorDefaults {
    /// Agent runtime provider.
    pub provider: String,

    /// Provider serving the language model.
    pub llm_provider: String,

    /// Language model identifier.
    pub llm_model: String,

    /// Version stamped onto every skill.
    pub skill_version: String,
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            provider: "anthropic".to_string(),
            llm_provider: "anthropic".to_string(),
            llm_model: "claude-sonnet-4-5-20250929".to_string(),
            skill_version: "1.0.0".to_string(),
        }
    }
}

/// An agent definition compiled from a markdown file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentRecord {
    /// Unique key, the file stem.
    pub name: String,

    /// Classification from the static agent table.
    #[serde(rename = "type")]
    pub agent_type: String,

    /// First top-level heading, or the fallback description.
    pub description: String,

    /// Full raw text of the source file.
    #[serde(skip_serializing)]
    pub content: String,

    /// Agent runtime provider.
    pub provider: String,

    /// Provider serving the language model.
    pub llm_provider: String,

    /// Language model identifier.
    pub llm_model: String,
}

/// One file of a serialized skill tree.
///
/// The JSON shape (`{"path": ..., "content": ...}`) is what downstream
/// readers of the `files` column expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillFile {
    /// Path relative to the skill root, `/`-separated.
    pub path: String,

    /// UTF-8 file content.
    pub content: String,
}

/// Declared dependencies of a skill.
///
/// Sets are ordered so the encoded JSON is stable across runs.
///
/// # Examples
///
/// ```
/// use seed_core::SkillDependencies;
///
/// let mut deps = SkillDependencies::default();
/// deps.connectors.insert("github".to_string());
///
/// let json = serde_json::to_string(&deps).unwrap();
/// assert_eq!(json, r#"{"mcp_servers":["github"],"skills":[]}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDependencies {
    /// Connectors (MCP servers) the skill needs at runtime.
    #[serde(rename = "mcp_servers")]
    pub connectors: BTreeSet<String>,

    /// Other skills this skill builds on.
    pub skills: BTreeSet<String>,
}

impl SkillDependencies {
    /// Returns `true` if the skill declares no dependencies at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty() && self.skills.is_empty()
    }
}

/// A skill definition compiled from a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillRecord {
    /// Unique key, the directory name.
    pub name: String,

    /// First top-level heading of the manifest, or `Skill: <name>`.
    pub description: String,

    /// Classification from the static skill table.
    pub category: String,

    /// Catalog version.
    pub version: String,

    /// Every decodable file under the skill directory, in path order.
    pub files: Vec<SkillFile>,

    /// Inferred dependency descriptor.
    pub dependencies: SkillDependencies,
}

/// Fields needed to register a connector that may not exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectorRegistration {
    /// Package or vendor that ships the server.
    pub provider: &'static str,

    /// Connector version.
    pub version: &'static str,

    /// Human-readable description.
    pub description: &'static str,

    /// JSON schema for the connection settings.
    pub connection_schema: &'static str,

    /// JSON array of capability identifiers.
    pub capabilities: &'static str,

    /// Whether callers must supply credentials.
    pub requires_credentials: bool,

    /// Whether the connector is pre-approved for use.
    pub is_approved: bool,

    /// Name of the connector category row.
    pub category: &'static str,
}

/// A hand-specified connector (MCP server) catalog entry.
///
/// Entries with a [`ConnectorRegistration`] are upserted. Entries without
/// one are assumed to be registered already and only have their deployment
/// fields refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Unique key in the connector catalog.
    pub name: &'static str,

    /// Comment line emitted above the statement.
    pub label: &'static str,

    /// Container image running the server.
    pub docker_image: &'static str,

    /// JSON object of default configuration.
    pub config_template: &'static str,

    /// JSON array of environment variables the container needs.
    pub required_env_vars: &'static str,

    /// Registration fields, `None` for update-only entries.
    pub registration: Option<ConnectorRegistration>,
}
