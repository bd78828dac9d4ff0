//! Configuration file support.
//!
//! Configuration is optional and stored in TOML:
//!
//! ```toml
//! [paths]
//! agents_dir = ".claude/agents"
//! skills_dir = ".claude/skills"
//! output = "shared/schema/seeds/002_claude_config.sql"
//!
//! [defaults]
//! provider = "anthropic"
//! llm_provider = "anthropic"
//! llm_model = "claude-sonnet-4-5-20250929"
//! skill_version = "1.0.0"
//! ```
//!
//! Every key is optional. Missing keys keep their built-in default and
//! command-line flags override whatever the file says.

use crate::cli::SourceArgs;
use seed_core::{GeneratorDefaults, Result, SeedError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Complete compiler configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeedConfig {
    /// Source and output locations
    pub paths: PathsConfig,

    /// Values stamped onto generated records
    pub defaults: GeneratorDefaults,
}

/// Source and output locations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory of agent markdown files
    pub agents_dir: PathBuf,

    /// Directory of skill folders
    pub skills_dir: PathBuf,

    /// Generated SQL file
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            agents_dir: PathBuf::from(".claude/agents"),
            skills_dir: PathBuf::from(".claude/skills"),
            output: PathBuf::from("shared/schema/seeds/002_claude_config.sql"),
        }
    }
}

impl SeedConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Config`] if the text is not valid TOML, has
    /// wrongly typed keys, or fails [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| SeedError::Config {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Io`] if the file cannot be read, or
    /// [`SeedError::Config`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading config from: {}", path.display());
        let text = fs::read_to_string(path).map_err(|e| SeedError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Loads the file named in `sources` (if any) and applies the flags on top.
    ///
    /// # Errors
    ///
    /// Propagates [`load`](Self::load) errors.
    pub fn resolve(sources: &SourceArgs) -> Result<Self> {
        let mut config = match &sources.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(dir) = &sources.agents_dir {
            config.paths.agents_dir.clone_from(dir);
        }
        if let Some(dir) = &sources.skills_dir {
            config.paths.skills_dir.clone_from(dir);
        }

        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Config`] naming the first empty value.
    pub fn validate(&self) -> Result<()> {
        let paths = [
            ("paths.agents_dir", &self.paths.agents_dir),
            ("paths.skills_dir", &self.paths.skills_dir),
            ("paths.output", &self.paths.output),
        ];
        for (key, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(empty(key));
            }
        }

        let values = [
            ("defaults.provider", &self.defaults.provider),
            ("defaults.llm_provider", &self.defaults.llm_provider),
            ("defaults.llm_model", &self.defaults.llm_model),
            ("defaults.skill_version", &self.defaults.skill_version),
        ];
        for (key, value) in values {
            if value.trim().is_empty() {
                return Err(empty(key));
            }
        }

        Ok(())
    }
}

fn empty(key: &str) -> SeedError {
    SeedError::Config {
        message: format!("{key} cannot be empty"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SeedConfig::default();
        assert_eq!(config.paths.agents_dir, PathBuf::from(".claude/agents"));
        assert_eq!(config.paths.skills_dir, PathBuf::from(".claude/skills"));
        assert_eq!(config.defaults, GeneratorDefaults::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = SeedConfig::from_toml_str(
            r#"
[defaults]
llm_model = "claude-opus-4"
"#,
        )
        .unwrap();

        assert_eq!(config.defaults.llm_model, "claude-opus-4");
        assert_eq!(config.defaults.provider, "anthropic");
        assert_eq!(config.paths, PathsConfig::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(SeedConfig::from_toml_str("").unwrap(), SeedConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = SeedConfig::from_toml_str("[paths\nagents_dir = 1").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_wrong_type_is_config_error() {
        let err = SeedConfig::from_toml_str("[defaults]\nllm_model = 5\n").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_empty_value_rejected() {
        let err = SeedConfig::from_toml_str("[defaults]\nllm_model = \"  \"\n").unwrap_err();
        assert!(err.to_string().contains("defaults.llm_model cannot be empty"));

        let err = SeedConfig::from_toml_str("[paths]\noutput = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("paths.output cannot be empty"));
    }

    #[test]
    fn test_resolve_flags_override_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("seed.toml");
        fs::write(
            &file,
            "[paths]\nagents_dir = \"from-file/agents\"\nskills_dir = \"from-file/skills\"\n",
        )
        .unwrap();

        let sources = SourceArgs {
            agents_dir: Some(PathBuf::from("flag/agents")),
            skills_dir: None,
            config: Some(file),
        };
        let config = SeedConfig::resolve(&sources).unwrap();
        assert_eq!(config.paths.agents_dir, PathBuf::from("flag/agents"));
        assert_eq!(config.paths.skills_dir, PathBuf::from("from-file/skills"));
    }

    #[test]
    fn test_resolve_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let sources = SourceArgs {
            config: Some(temp.path().join("absent.toml")),
            ..SourceArgs::default()
        };
        assert!(SeedConfig::resolve(&sources).unwrap_err().is_io_error());
    }
}
