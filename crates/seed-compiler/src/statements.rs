//! SQL statement generation.
//!
//! Each record family becomes one self-contained batch, introduced by a
//! comment banner:
//! - agents: upsert into `agents`, then content refresh of existing
//!   `employee_agent_configs` rows
//! - skills: upsert into `skill_catalog` with JSON-encoded files and
//!   dependencies
//! - connectors: upsert or update into `mcp_catalog` from the constant table
//!
//! Every string literal goes through [`escape_sql_string`](crate::escape_sql_string)
//! and every name echoed in a `--` comment goes through
//! [`comment_text`](crate::comment_text).
//! Conflict keys are always `name`, so applying a batch twice converges on
//! the same rows.

use crate::sql::{comment_text, jsonb, literal};
use seed_core::{AgentRecord, CatalogEntry, Result, SeedError, SkillRecord};

/// Default `agents.default_config` value.
const AGENT_DEFAULT_CONFIG: &str = "{}";

/// Default `agents.capabilities` value.
const AGENT_CAPABILITIES: &str = r#"["code_generation", "debugging", "refactoring"]"#;

const BANNER_RULE: &str =
    "-- ============================================================================";

fn banner(title: &str) -> Vec<String> {
    vec![
        BANNER_RULE.to_string(),
        format!("-- {title}"),
        BANNER_RULE.to_string(),
        String::new(),
    ]
}

/// Generates the agent batch.
///
/// On conflict only `description`, `llm_model` and `updated_at` change, so
/// `type` and `content` edited in a live deployment survive a re-seed.
/// The trailing `UPDATE employee_agent_configs` statements touch only rows
/// whose agent already exists with an assignment; with no matching row they
/// are no-ops.
///
/// Returns an empty string for an empty slice.
///
/// # Examples
///
/// ```
/// use seed_compiler::agent_statements;
///
/// assert!(agent_statements(&[]).is_empty());
/// ```
#[must_use]
pub fn agent_statements(agents: &[AgentRecord]) -> String {
    if agents.is_empty() {
        return String::new();
    }

    let mut parts = banner("AGENT CATALOG - Agents compiled from markdown definitions");

    for agent in agents {
        parts.push(format!("-- Agent: {}", comment_text(&agent.name)));
        parts.push(format!(
            "INSERT INTO agents (name, type, description, provider, llm_provider, llm_model, default_config, capabilities)
VALUES (
    {name},
    {agent_type},
    {description},
    {provider},
    {llm_provider},
    {llm_model},
    {default_config},
    {capabilities}
)
ON CONFLICT (name) DO UPDATE SET
    description = EXCLUDED.description,
    llm_model = EXCLUDED.llm_model,
    updated_at = NOW();
",
            name = literal(&agent.name),
            agent_type = literal(&agent.agent_type),
            description = literal(&agent.description),
            provider = literal(&agent.provider),
            llm_provider = literal(&agent.llm_provider),
            llm_model = literal(&agent.llm_model),
            default_config = jsonb(AGENT_DEFAULT_CONFIG),
            capabilities = jsonb(AGENT_CAPABILITIES),
        ));
        parts.push(String::new());
    }

    parts.push("-- Update employee_agent_configs.content for existing agent assignments".to_string());
    parts.push("-- (No-op for agents without assignments)".to_string());
    for agent in agents {
        parts.push(format!(
            "UPDATE employee_agent_configs
SET content = {content}
WHERE agent_id = (SELECT id FROM agents WHERE name = {name});
",
            content = literal(&agent.content),
            name = literal(&agent.name),
        ));
        parts.push(String::new());
    }

    parts.join("\n")
}

/// Generates the skill batch.
///
/// On conflict `description`, `files`, `dependencies`, `version` and
/// `updated_at` are refreshed.
///
/// Returns an empty string for an empty slice.
///
/// # Errors
///
/// Returns [`SeedError::Serialization`] if a record cannot be encoded as
/// JSON.
pub fn skill_statements(skills: &[SkillRecord]) -> Result<String> {
    if skills.is_empty() {
        return Ok(String::new());
    }

    let mut parts = banner("SKILL CATALOG - Skills compiled from skill directories");

    for skill in skills {
        let files_json =
            serde_json::to_string(&skill.files).map_err(|source| SeedError::Serialization {
                message: format!("files of skill '{}'", skill.name),
                source,
            })?;
        let deps_json = serde_json::to_string(&skill.dependencies).map_err(|source| {
            SeedError::Serialization {
                message: format!("dependencies of skill '{}'", skill.name),
                source,
            }
        })?;

        parts.push(format!(
            "-- Skill: {} ({} files)",
            comment_text(&skill.name),
            skill.files.len()
        ));
        parts.push(format!(
            "INSERT INTO skill_catalog (name, description, category, version, files, dependencies, is_active)
VALUES (
    {name},
    {description},
    {category},
    {version},
    {files},
    {dependencies},
    true
)
ON CONFLICT (name) DO UPDATE SET
    description = EXCLUDED.description,
    files = EXCLUDED.files,
    dependencies = EXCLUDED.dependencies,
    version = EXCLUDED.version,
    updated_at = NOW();
",
            name = literal(&skill.name),
            description = literal(&skill.description),
            category = literal(&skill.category),
            version = literal(&skill.version),
            files = jsonb(&files_json),
            dependencies = jsonb(&deps_json),
        ));
        parts.push(String::new());
    }

    Ok(parts.join("\n"))
}

/// Generates the connector batch from constant entries.
///
/// Entries carrying a registration are upserted; the rest only refresh the
/// deployment fields of an existing row.
#[must_use]
pub fn connector_statements(entries: &[CatalogEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut parts = banner("MCP SERVERS - Docker-based MCP server configurations");

    for entry in entries {
        parts.push(format!("-- {}", comment_text(entry.label)));
        parts.push(connector_statement(entry));
        parts.push(String::new());
    }

    parts.join("\n")
}

fn connector_statement(entry: &CatalogEntry) -> String {
    let Some(reg) = entry.registration else {
        return format!(
            "UPDATE mcp_catalog
SET
    docker_image = {docker_image},
    config_template = {config_template},
    required_env_vars = {required_env_vars},
    updated_at = NOW()
WHERE name = {name};
",
            docker_image = literal(entry.docker_image),
            config_template = jsonb(entry.config_template),
            required_env_vars = jsonb(entry.required_env_vars),
            name = literal(entry.name),
        );
    };

    format!(
        "INSERT INTO mcp_catalog (
    name,
    provider,
    version,
    description,
    connection_schema,
    capabilities,
    requires_credentials,
    is_approved,
    category_id,
    docker_image,
    config_template,
    required_env_vars
)
VALUES (
    {name},
    {provider},
    {version},
    {description},
    {connection_schema},
    {capabilities},
    {requires_credentials},
    {is_approved},
    (SELECT id FROM mcp_categories WHERE name = {category}),
    {docker_image},
    {config_template},
    {required_env_vars}
)
ON CONFLICT (name) DO UPDATE SET
    docker_image = EXCLUDED.docker_image,
    config_template = EXCLUDED.config_template,
    updated_at = NOW();
",
        name = literal(entry.name),
        provider = literal(reg.provider),
        version = literal(reg.version),
        description = literal(reg.description),
        connection_schema = jsonb(reg.connection_schema),
        capabilities = jsonb(reg.capabilities),
        requires_credentials = reg.requires_credentials,
        is_approved = reg.is_approved,
        category = literal(reg.category),
        docker_image = literal(entry.docker_image),
        config_template = jsonb(entry.config_template),
        required_env_vars = jsonb(entry.required_env_vars),
    )
}
