//! CLI command implementations
//!
//! `serve` builds the Tokio runtime and runs the HTTP server to
//! completion; `catalog` prints the static registry and exits. All
//! boot logic lives here, never in `main.rs`.

use crate::catalog::Catalog;
use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            host,
            port,
            review_delay_ms,
        } => serve(host, port, review_delay_ms),
        Command::Catalog => catalog(),
    }
}

/// Start the dashboard API server
fn serve(host: String, port: u16, review_delay_ms: u64) -> CliResult<()> {
    let config = HttpServerConfig {
        host,
        port,
        review_delay_ms,
        ..HttpServerConfig::default()
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime
        .block_on(HttpServer::with_config(config).start())
        .map_err(|e| CliError::Runtime(e.to_string()))
}

/// Print the document type catalog
fn catalog() -> CliResult<()> {
    let catalog = Catalog::new();
    println!("{:<22} {}", "ID", "TITLE");
    for entry in catalog.all() {
        println!("{:<22} {}", entry.id, entry.title);
    }
    println!("{} document types", catalog.len());
    Ok(())
}
