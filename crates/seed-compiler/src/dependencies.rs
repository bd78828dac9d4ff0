//! Dependency inference for skills.
//!
//! A skill needs a connector when the connector's keyword appears anywhere
//! in the skill name, compared case-insensitively. File contents are never
//! inspected and skill-to-skill dependencies are not detected.

use seed_core::SkillDependencies;

/// Keyword in a skill name to the connector it implies.
pub const CONNECTOR_KEYWORDS: &[(&str, &str)] = &[("github", "github")];

/// Infers the dependency descriptor for a skill from its name.
///
/// # Examples
///
/// ```
/// use seed_compiler::infer_dependencies;
///
/// let deps = infer_dependencies("github-pr-workflow");
/// assert!(deps.connectors.contains("github"));
///
/// assert!(infer_dependencies("release-manager").is_empty());
/// ```
#[must_use]
pub fn infer_dependencies(skill_name: &str) -> SkillDependencies {
    let lowered = skill_name.to_lowercase();
    let mut deps = SkillDependencies::default();

    for (keyword, connector) in CONNECTOR_KEYWORDS {
        if lowered.contains(keyword) {
            deps.connectors.insert((*connector).to_string());
        }
    }

    deps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_skill_requires_github() {
        let deps = infer_dependencies("github-pr-workflow");
        assert_eq!(deps.connectors.len(), 1);
        assert!(deps.connectors.contains("github"));
        assert!(deps.skills.is_empty());
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        assert!(infer_dependencies("MyGitHubHelper").connectors.contains("github"));
        assert!(infer_dependencies("sync-GITHUB").connectors.contains("github"));
    }

    #[test]
    fn test_unrelated_skill_has_no_connectors() {
        let deps = infer_dependencies("release-manager");
        assert!(deps.connectors.is_empty());
        assert!(deps.skills.is_empty());
    }

    #[test]
    fn test_partial_keyword_does_not_match() {
        assert!(infer_dependencies("git-hub").is_empty());
        assert!(infer_dependencies("gitlab-sync").is_empty());
    }
}
