//! reqsift CLI library
//!
//! This library provides the command-line interface for the reqsift
//! requirement extraction system.

pub mod commands;
pub mod demo;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};

use commands::{Cli, Commands};

/// Dispatch a parsed invocation
pub fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        None => demo::run(),
        Some(Commands::Extract(args)) => args.execute(),
        Some(Commands::List { subcommand }) => commands::list(subcommand),
    }
}
