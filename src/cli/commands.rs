//! CLI command implementations

use std::path::Path;

use tracing::info;

use super::args::{Cli, Command};
use super::errors::CliResult;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::init_logging;

/// Parse arguments, initialize logging and run the selected command
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbosity());
    run_command(cli.command).await
}

/// Dispatch a parsed command
pub async fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            config,
            host,
            port,
            empty,
        } => {
            let config = resolve_config(config.as_deref(), host, port, empty)?;
            serve(config).await
        }
    }
}

/// Load the config file (if any) and apply command-line overrides
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    empty: bool,
) -> CliResult<HttpServerConfig> {
    let mut config = match path {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            HttpServerConfig::load(path)?
        }
        None => HttpServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if empty {
        config.seed_demo_records = false;
    }

    config.validate()?;
    Ok(config)
}

/// Run the HTTP server until it fails
pub async fn serve(config: HttpServerConfig) -> CliResult<()> {
    HttpServer::with_config(config).start().await?;
    Ok(())
}
