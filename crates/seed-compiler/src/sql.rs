//! SQL literal helpers.

/// Escapes a string for a single-quoted SQL literal.
///
/// Every `'` is doubled; nothing else is touched. Control characters and
/// length are passed through as-is.
///
/// # Examples
///
/// ```
/// use seed_compiler::escape_sql_string;
///
/// assert_eq!(escape_sql_string("it's"), "it''s");
/// assert_eq!(escape_sql_string("plain"), "plain");
/// ```
#[must_use]
pub fn escape_sql_string(s: &str) -> String {
    s.replace('\'', "''")
}

/// Makes `s` safe to place after `--` in a single-line SQL comment.
///
/// A line comment ends at the first line break, so `\n` and `\r` are
/// written as their two-character escapes. Everything else is kept.
///
/// # Examples
///
/// ```
/// use seed_compiler::comment_text;
///
/// assert_eq!(comment_text("tech-lead"), "tech-lead");
/// assert_eq!(comment_text("a\nDROP TABLE agents;"), "a\\nDROP TABLE agents;");
/// ```
#[must_use]
pub fn comment_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

/// Escapes `s` and wraps it in single quotes.
pub(crate) fn literal(s: &str) -> String {
    format!("'{}'", escape_sql_string(s))
}

/// Escapes `json` and casts the literal to `JSONB`.
pub(crate) fn jsonb(json: &str) -> String {
    format!("{}::JSONB", literal(json))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every run of quotes in an escaped string has even length.
    fn quotes_balanced(s: &str) -> bool {
        s.split(|c| c != '\'')
            .filter(|run| !run.is_empty())
            .all(|run| run.len() % 2 == 0)
    }

    #[test]
    fn test_escape_doubles_quotes() {
        assert_eq!(escape_sql_string("O'Brien"), "O''Brien");
        assert_eq!(escape_sql_string("''"), "''''");
        assert_eq!(escape_sql_string(""), "");
    }

    #[test]
    fn test_escape_leaves_other_characters() {
        let input = "line1\nline2\t\\ \"quoted\" -- comment; DROP";
        assert_eq!(escape_sql_string(input), input);
    }

    #[test]
    fn test_escape_never_leaves_unpaired_quotes() {
        let inputs = [
            "'",
            "'''",
            "a'b'c",
            "'leading",
            "trailing'",
            "mixed ' and '' and '''",
            "unicode ✓ 'quoted' ✓",
        ];
        for input in inputs {
            let escaped = escape_sql_string(input);
            assert!(quotes_balanced(&escaped), "unbalanced: {escaped}");

            let twice = escape_sql_string(&escaped);
            assert!(quotes_balanced(&twice), "unbalanced: {twice}");
        }
    }

    #[test]
    fn test_escape_is_reversible() {
        let input = "it's 'quoted'";
        assert_eq!(escape_sql_string(input).replace("''", "'"), input);
    }

    #[test]
    fn test_comment_text_has_no_line_breaks() {
        let escaped = comment_text("evil\nDROP TABLE agents;\r\n--");
        assert_eq!(escaped, "evil\\nDROP TABLE agents;\\r\\n--");
        assert_eq!(escaped.lines().count(), 1);
    }

    #[test]
    fn test_comment_text_keeps_plain_names() {
        for name in ["tech-lead", "release manager", "it's", "ünïcode"] {
            assert_eq!(comment_text(name), name);
        }
    }

    #[test]
    fn test_literal_and_jsonb() {
        assert_eq!(literal("it's"), "'it''s'");
        assert_eq!(jsonb(r#"{"a":"b's"}"#), r#"'{"a":"b''s"}'::JSONB"#);
    }
}
