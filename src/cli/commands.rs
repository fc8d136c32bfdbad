//! CLI command implementations
//!
//! The serve command owns process setup: logging subscriber, server
//! configuration, and the tokio runtime. main.rs stays minimal.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { port } => serve(port),
    }
}

/// Start the catalog HTTP server.
///
/// Port resolution order: --port flag, then the PORT environment
/// variable, then the default (3000).
pub fn serve(port: Option<u16>) -> CliResult<()> {
    init_tracing();

    let mut config = HttpServerConfig::from_env();
    if let Some(port) = port {
        config.port = port;
    }

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Initialize the tracing subscriber. RUST_LOG overrides the default
/// filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalogd=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
