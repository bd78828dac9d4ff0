//! Core types and errors for the catalog seed compiler.
//!
//! This crate provides the foundational types shared by the compiler and
//! the command-line front end.
//!
//! # Architecture
//!
//! The core consists of:
//! - Catalog records (`AgentRecord`, `SkillRecord`, `CatalogEntry`)
//! - Error hierarchy with contextual information
//! - Generator defaults applied to every record
//! - CLI primitives (`OutputFormat`, `ExitCode`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod cli;
mod error;
mod types;

pub use error::{Result, SeedError};
pub use types::{
    AgentRecord, CatalogEntry, ConnectorRegistration, GeneratorDefaults, SkillDependencies,
    SkillFile, SkillRecord,
};
