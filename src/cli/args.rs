//! CLI argument definitions using clap
//!
//! Commands:
//! - catalogd serve [--port <port>]

use clap::{Parser, Subcommand};

/// catalogd - a small in-memory product catalog REST API
#[derive(Parser, Debug)]
#[command(name = "catalogd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the catalog HTTP server
    Serve {
        /// Port to listen on (overrides the PORT environment variable)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
