//! CLI-specific error types

use std::io;

use thiserror::Error;

use crate::http_server::ConfigError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("server error: {0}")]
    Io(#[from] io::Error),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
