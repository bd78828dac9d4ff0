//! Output formatters for run summaries.
//!
//! Summaries are serialized once and rendered in the requested
//! [`OutputFormat`]. The SQL artifact itself never goes through here.

use anyhow::Result;
use colored::Colorize;
use seed_core::cli::OutputFormat;
use serde::Serialize;
use serde_json::Value;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use seed_cli::formatters::format_output;
/// use seed_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Counts {
///     agents: usize,
/// }
///
/// let output = format_output(&Counts { agents: 3 }, OutputFormat::Text)?;
/// assert_eq!(output, r#"{"agents":3}"#);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Text => Ok(serde_json::to_string(data)?),
        OutputFormat::Pretty => {
            let value = serde_json::to_value(data)?;
            let mut out = String::new();
            pretty(&value, 0, &mut out);
            Ok(out.trim_end().to_string())
        }
    }
}

/// Renders `value` as an indented `key: value` listing.
fn pretty(value: &Value, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                if is_nested(val) {
                    out.push_str(&format!("{indent}{}:\n", key.blue().bold()));
                    pretty(val, depth + 1, out);
                } else {
                    out.push_str(&format!("{indent}{}: {}\n", key.blue().bold(), scalar(val)));
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                if is_nested(item) {
                    out.push_str(&format!("{indent}-\n"));
                    pretty(item, depth + 1, out);
                } else {
                    out.push_str(&format!("{indent}- {}\n", scalar(item)));
                }
            }
        }
        other => out.push_str(&format!("{indent}{}\n", scalar(other))),
    }
}

fn is_nested(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::Null => "none".dimmed().to_string(),
        Value::Bool(b) => b.to_string().yellow().to_string(),
        Value::Number(n) => n.to_string().cyan().to_string(),
        Value::String(s) => s.green().to_string(),
        Value::Array(_) => "[]".dimmed().to_string(),
        Value::Object(_) => "{}".dimmed().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Summary {
        output: String,
        agents: usize,
        skipped: Vec<String>,
        connectors: Vec<String>,
    }

    fn summary() -> Summary {
        Summary {
            output: "seed.sql".to_string(),
            agents: 2,
            skipped: Vec::new(),
            connectors: vec!["Playwright".to_string(), "GitHub".to_string()],
        }
    }

    #[test]
    fn test_json_format() {
        let output = format_output(&summary(), OutputFormat::Json).unwrap();
        assert!(output.contains("\"output\": \"seed.sql\""));
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_text_format_is_single_line() {
        let output = format_output(&summary(), OutputFormat::Text).unwrap();
        assert!(!output.contains('\n'));
        assert!(output.contains("\"agents\":2"));
    }

    #[test]
    fn test_pretty_format() {
        colored::control::set_override(false);
        let output = format_output(&summary(), OutputFormat::Pretty).unwrap();
        assert!(output.contains("output: seed.sql"));
        assert!(output.contains("agents: 2"));
        assert!(output.contains("skipped: []"));
        assert!(output.contains("connectors:\n  - Playwright\n  - GitHub"));
    }
}
