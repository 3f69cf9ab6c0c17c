//! Extract command implementation

use crate::error::{CliError, CliResult};
use crate::output::{JsonFormatter, MarkdownFormatter, RequirementFormatter, TextFormatter};
use anyhow::Context;
use clap::Args;
use reqsift_core::{group_by_stakeholder, Lexicon, RequirementsExtractor};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Input description file ("-" reads from stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Custom lexicon profile (TOML)
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Numbered requirements, one per line
    Text,
    /// JSON array of classified requirements
    Json,
    /// Markdown grouped by stakeholder
    Markdown,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        let description = self.read_description()?;
        let extractor = self.build_extractor()?;

        log::info!("extracting requirements from {}", self.input);
        let requirements = extractor.extract_requirements(&description)?;
        let grouped = group_by_stakeholder(requirements);
        log::info!("extracted {} requirements", grouped.len());

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                fs::File::create(path)
                    .with_context(|| format!("cannot create {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn RequirementFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };
        formatter.write_requirements(&grouped)
    }

    fn read_description(&self) -> CliResult<String> {
        if self.input == "-" {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read from stdin")?;
            Ok(buffer)
        } else {
            Ok(fs::read_to_string(&self.input)
                .map_err(|_| CliError::FileNotFound(self.input.clone()))?)
        }
    }

    fn build_extractor(&self) -> CliResult<RequirementsExtractor> {
        let mut builder = RequirementsExtractor::builder();
        if let Some(path) = &self.lexicon {
            let lexicon = Lexicon::from_path(path)?;
            log::debug!(
                "using lexicon profile '{}' from {}",
                lexicon.name(),
                path.display()
            );
            builder = builder.lexicon(lexicon);
        }
        Ok(builder.build())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
