//! CLI module for J-PRAT
//!
//! Provides the command-line interface:
//! - serve: boot the dashboard API server
//! - catalog: print the document type registry

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run_command;
pub use errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
