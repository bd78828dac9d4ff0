//! Command implementations for the catalog seed CLI.
//!
//! Each command resolves its configuration, runs the compiler, and formats
//! a summary according to the requested format.

pub mod generate;
pub mod inspect;
