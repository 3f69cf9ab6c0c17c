//! JSON output formatter

use super::RequirementFormatter;
use anyhow::Result;
use reqsift_core::ClassifiedRequirement;
use std::io::Write;

/// JSON formatter - outputs a pretty-printed array of classified requirements
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> RequirementFormatter for JsonFormatter<W> {
    fn write_requirements(&mut self, requirements: &[ClassifiedRequirement]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, requirements)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
