//! Error types for the catalog seed compiler.
//!
//! Only a handful of conditions are fatal for a compile run: a missing
//! source root, an I/O failure while reading or writing, and a bad
//! configuration. Everything else (missing headings, missing manifests,
//! binary files) is resolved by fallback or omission and never reaches
//! this type.
//!
//! # Examples
//!
//! ```
//! use seed_core::{Result, SeedError};
//! use std::path::Path;
//!
//! fn require_dir(path: &Path) -> Result<()> {
//!     if !path.is_dir() {
//!         return Err(SeedError::DirectoryNotFound {
//!             path: path.to_path_buf(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_dir(Path::new("/definitely/not/here")).unwrap_err();
//! assert!(err.is_not_found());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for catalog compilation.
#[derive(Error, Debug)]
pub enum SeedError {
    /// A source root directory does not exist or is not a directory.
    #[error("directory does not exist: {}", path.display())]
    DirectoryNotFound {
        /// Path that was expected to be a directory
        path: PathBuf,
    },

    /// Reading or writing a file or directory failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding of a record field failed.
    #[error("serialization error: {message}")]
    Serialization {
        /// Which record field was being encoded
        message: String,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Configuration is invalid or could not be parsed.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid CLI argument or function parameter.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SeedError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if a source root was missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use seed_core::SeedError;
    ///
    /// let err = SeedError::DirectoryNotFound {
    ///     path: "agents".into(),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::DirectoryNotFound { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use seed_core::SeedError;
    ///
    /// let err = SeedError::Config {
    ///     message: "llm_model cannot be empty".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Returns `true` if the error was caused by user input rather than the
    /// filesystem.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::InvalidArgument(_))
    }
}

/// Result type alias for catalog compilation.
pub type Result<T> = std::result::Result<T, SeedError>;
