//! Subcommand implementations.
//!
//! Each command returns what it produced so callers decide what reaches stdout.

pub mod build;
pub mod show;
