//! CLI argument definitions using clap
//!
//! Commands:
//! - jprat serve [--host <host>] [--port <port>] [--review-delay-ms <ms>]
//! - jprat catalog

use clap::{Parser, Subcommand};

/// J-PRAT - Document verification demo service
#[derive(Parser, Debug)]
#[command(name = "jprat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the dashboard API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 7341)]
        port: u16,

        /// Simulated review delay in milliseconds
        #[arg(long, default_value_t = 3000)]
        review_delay_ms: u64,
    },

    /// Print the document type catalog and exit
    Catalog,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
