//! Markdown output formatter

use super::RequirementFormatter;
use anyhow::Result;
use reqsift_core::{ClassifiedRequirement, Stakeholder};
use std::io::Write;

/// Markdown formatter - one section per stakeholder with a count footer
pub struct MarkdownFormatter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> RequirementFormatter for MarkdownFormatter<W> {
    fn write_requirements(&mut self, requirements: &[ClassifiedRequirement]) -> Result<()> {
        writeln!(self.writer, "# Requirements")?;

        for stakeholder in [
            Stakeholder::Customer,
            Stakeholder::Administrator,
            Stakeholder::System,
        ] {
            let group: Vec<_> = requirements
                .iter()
                .filter(|r| r.stakeholder == stakeholder)
                .collect();
            if group.is_empty() {
                continue;
            }
            writeln!(self.writer, "\n## {stakeholder}\n")?;
            for (index, requirement) in group.iter().enumerate() {
                writeln!(
                    self.writer,
                    "{}. {} (*{}*; {})",
                    index + 1,
                    requirement.text,
                    requirement.kind,
                    requirement.categories.join(", ")
                )?;
            }
        }

        writeln!(self.writer, "\n---")?;
        writeln!(self.writer, "*Total requirements: {}*", requirements.len())?;
        self.writer.flush()?;
        Ok(())
    }
}
