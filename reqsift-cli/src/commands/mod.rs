//! CLI command implementations

use crate::error::CliResult;
use clap::{Parser, Subcommand};
use reqsift_core::RequirementsExtractor;

pub mod extract;

/// Top-level command-line interface
///
/// With no subcommand, the embedded example description is processed and the
/// grouped requirements are printed as a numbered list.
#[derive(Debug, Parser)]
#[command(
    name = "reqsift",
    version,
    about = "Draft software requirements from free-form system descriptions"
)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract requirements from a description file
    Extract(extract::ExtractArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the active category taxonomy
    Categories,

    /// List available output formats
    Formats,
}

/// Execute a list subcommand
pub fn list(subcommand: ListCommands) -> CliResult<()> {
    match subcommand {
        ListCommands::Categories => {
            let extractor = RequirementsExtractor::new();
            for category in extractor.lexicon().categories() {
                println!("{}: {}", category.name, category.keywords.join(", "));
            }
        }
        ListCommands::Formats => {
            for format in ["text", "json", "markdown"] {
                println!("{format}");
            }
        }
    }
    Ok(())
}
