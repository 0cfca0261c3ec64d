//! Command handlers for the ccon CLI.
//!
//! Each submodule handles one subcommand; dispatch stays in main.rs.

pub mod completions;
pub mod demo;
pub mod progress;
pub mod prompt;
