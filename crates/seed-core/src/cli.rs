//! CLI-specific types shared by the front end and its tests.
//!
//! # Examples
//!
//! ```
//! use seed_core::cli::{ExitCode, OutputFormat};
//!
//! let format: OutputFormat = "json".parse().unwrap();
//! assert_eq!(format, OutputFormat::Json);
//!
//! assert!(ExitCode::SUCCESS.is_success());
//! ```

use std::fmt;
use std::str::FromStr;

/// How run summaries are printed.
///
/// The generated SQL artifact is unaffected by this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON for machine parsing
    Json,
    /// Single-line JSON for scripts
    Text,
    /// Colored, indented output for humans
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Returns the string representation of the format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = crate::SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            "pretty" => Ok(Self::Pretty),
            _ => Err(crate::SeedError::InvalidArgument(format!(
                "invalid output format: '{s}' (expected: json, text, or pretty)"
            ))),
        }
    }
}

/// Process exit code with semantic meaning.
///
/// # Examples
///
/// ```
/// use seed_core::cli::ExitCode;
///
/// assert_eq!(ExitCode::MISSING_SOURCE.as_i32(), 3);
/// assert!(!ExitCode::ERROR.is_success());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Artifact written (or records inspected) successfully.
    pub const SUCCESS: Self = Self(0);

    /// Unclassified failure, usually I/O while reading sources or writing output.
    pub const ERROR: Self = Self(1);

    /// Bad arguments or configuration file.
    pub const INVALID_INPUT: Self = Self(2);

    /// An agents or skills root directory does not exist.
    pub const MISSING_SOURCE: Self = Self(3);

    /// Creates an exit code from an integer value.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        Self(code)
    }

    /// Returns the exit code as an integer.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Checks if the exit code represents success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }

    /// Maps a compiler error onto the exit code reported to the shell.
    ///
    /// # Examples
    ///
    /// ```
    /// use seed_core::SeedError;
    /// use seed_core::cli::ExitCode;
    ///
    /// let err = SeedError::DirectoryNotFound { path: "agents".into() };
    /// assert_eq!(ExitCode::for_error(&err), ExitCode::MISSING_SOURCE);
    /// ```
    #[must_use]
    pub const fn for_error(err: &crate::SeedError) -> Self {
        if err.is_not_found() {
            Self::MISSING_SOURCE
        } else if err.is_user_error() {
            Self::INVALID_INPUT
        } else {
            Self::ERROR
        }
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeedError;

    #[test]
    fn test_output_format_from_str_valid() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(
            "PRETTY".parse::<OutputFormat>().unwrap(),
            OutputFormat::Pretty
        );
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(err.is_user_error());
        assert!("".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_default_and_display() {
        assert_eq!(OutputFormat::default(), OutputFormat::Pretty);
        assert_eq!(OutputFormat::Text.to_string(), "text");
    }

    #[test]
    fn test_exit_code_constants() {
        assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
        assert_eq!(ExitCode::ERROR.as_i32(), 1);
        assert_eq!(ExitCode::INVALID_INPUT.as_i32(), 2);
        assert_eq!(ExitCode::MISSING_SOURCE.as_i32(), 3);
        assert_eq!(ExitCode::default(), ExitCode::SUCCESS);
        assert_eq!(ExitCode::from_i32(7).to_string(), "7");
    }

    #[test]
    fn test_exit_code_for_error() {
        let missing = SeedError::DirectoryNotFound {
            path: "skills".into(),
        };
        assert_eq!(ExitCode::for_error(&missing), ExitCode::MISSING_SOURCE);

        let config = SeedError::Config {
            message: "empty".to_string(),
        };
        assert_eq!(ExitCode::for_error(&config), ExitCode::INVALID_INPUT);

        let io = SeedError::io("out.sql", std::io::Error::other("disk full"));
        assert_eq!(ExitCode::for_error(&io), ExitCode::ERROR);

        let value: i32 = ExitCode::for_error(&io).into();
        assert_eq!(value, 1);
    }
}
