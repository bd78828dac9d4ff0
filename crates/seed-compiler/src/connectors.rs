//! Hand-maintained connector (MCP server) catalog entries.
//!
//! These are not derived from the filesystem. Editing this table is the
//! only way to change the connector batch of the generated artifact.

use seed_core::{CatalogEntry, ConnectorRegistration};

/// Connector entries in emission order.
pub const CONNECTORS: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Playwright",
        label: "Playwright MCP Server",
        docker_image: "ghcr.io/executeautomation/mcp-playwright:latest",
        config_template: r#"{"headless": true}"#,
        required_env_vars: "[]",
        registration: Some(ConnectorRegistration {
            provider: "@executeautomation/mcp-playwright",
            version: "1.0.0",
            description: "Browser automation and testing with Playwright",
            connection_schema: r#"{"type": "object", "properties": {"headless": {"type": "boolean"}}}"#,
            capabilities: r#"["browser_automation", "web_testing", "screenshots"]"#,
            requires_credentials: false,
            is_approved: true,
            category: "Development",
        }),
    },
    // Registered by the base schema seed; only the deployment fields change.
    CatalogEntry {
        name: "GitHub",
        label: "Update GitHub MCP Server with Docker image",
        docker_image: "ghcr.io/github/github-mcp-server:latest",
        config_template: r#"{"GITHUB_PERSONAL_ACCESS_TOKEN": "${GITHUB_TOKEN}"}"#,
        required_env_vars: r#"["GITHUB_PERSONAL_ACCESS_TOKEN"]"#,
        registration: None,
    },
];
