//! CLI module for catalogd
//!
//! Provides the command-line interface:
//! - serve: start the catalog HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run_command, serve};
pub use errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
