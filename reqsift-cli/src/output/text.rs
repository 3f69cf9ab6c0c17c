//! Plain text output formatter

use super::RequirementFormatter;
use anyhow::Result;
use reqsift_core::ClassifiedRequirement;
use std::io::{self, Write};

/// Plain text formatter - outputs one numbered requirement per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> RequirementFormatter for TextFormatter<W> {
    fn write_requirements(&mut self, requirements: &[ClassifiedRequirement]) -> Result<()> {
        for (index, requirement) in requirements.iter().enumerate() {
            writeln!(self.writer, "{}. {}", index + 1, requirement.text)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
