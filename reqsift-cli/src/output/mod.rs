//! Output formatting module

use anyhow::Result;
use reqsift_core::ClassifiedRequirement;

/// Trait for requirement output formatters
pub trait RequirementFormatter {
    /// Format and write the full (already grouped) requirement list
    fn write_requirements(&mut self, requirements: &[ClassifiedRequirement]) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
