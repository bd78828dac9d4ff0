//! Catalog seed CLI library.
//!
//! Exposes the command-line definitions, configuration loading, commands,
//! and formatters behind the `catalog-seed` binary so they can be tested.

#![allow(clippy::format_push_string)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod formatters;
pub mod runner;
