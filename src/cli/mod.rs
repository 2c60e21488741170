//! CLI module for roster
//!
//! Provides command-line interface for:
//! - serve: start the HTTP server over an in-memory store

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{resolve_config, run, run_command, serve};
pub use errors::{CliError, CliResult};
