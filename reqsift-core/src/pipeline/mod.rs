//! The extraction pipeline
//!
//! Six stages run in strict linear order, each stateless given its input:
//! segmentation, feature extraction, scoring, formulation, refinement, and
//! classification. [`RequirementsExtractor`] wires them together around a
//! shared analyzer and lexicon.

pub mod classifier;
pub mod features;
pub mod formulator;
pub mod refiner;
pub mod scorer;
pub mod segmenter;

pub use classifier::{
    group_by_stakeholder, ClassifiedRequirement, RequirementKind, Stakeholder,
};
pub use features::{FeatureRecord, SvoTriple};
pub use scorer::ScoredCandidate;

use crate::analysis::{Analyzer, HeuristicAnalyzer};
use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::lexicon::Lexicon;
use std::sync::Arc;

/// Drafts formal requirements from free-form system descriptions
///
/// Holds the analyzer and lexicon for its lifetime; both are read-only, so
/// one extractor can serve concurrent requests.
pub struct RequirementsExtractor {
    analyzer: Arc<dyn Analyzer>,
    lexicon: Lexicon,
    config: ExtractorConfig,
}

impl RequirementsExtractor {
    /// Create an extractor with the built-in analyzer and embedded lexicon
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create an extractor around a custom analyzer
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        Self::builder().analyzer(analyzer).build()
    }

    /// Create a builder
    pub fn builder() -> RequirementsExtractorBuilder {
        RequirementsExtractorBuilder::default()
    }

    /// The active lexicon
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Run all six stages and return classified requirements in scorer order.
    ///
    /// Degenerate input and descriptions with no qualifying candidates yield
    /// an empty list; only an analysis failure is an error.
    pub fn extract_requirements(&self, description: &str) -> Result<Vec<ClassifiedRequirement>> {
        let sentences = segmenter::segment(self.analyzer.as_ref(), &self.config, description)?;
        log::debug!("segmenter kept {} candidate sentences", sentences.len());

        let mut records = Vec::with_capacity(sentences.len());
        for sentence in &sentences {
            records.push(features::extract_features(
                self.analyzer.as_ref(),
                &self.lexicon,
                sentence,
            )?);
        }

        let candidates = scorer::rank_candidates(records, &self.lexicon, &self.config);
        log::debug!(
            "scorer kept {} of {} candidates",
            candidates.len(),
            sentences.len()
        );

        let drafts: Vec<String> = candidates
            .iter()
            .map(|candidate| formulator::formulate_draft(candidate, &self.lexicon))
            .collect();

        let refined = refiner::refine_drafts(drafts, &self.lexicon, &self.config);
        log::debug!("refiner kept {} requirements", refined.len());

        Ok(refined
            .into_iter()
            .map(|text| classifier::classify_text(text, &self.lexicon))
            .collect())
    }

    /// Run the pipeline and return requirement text grouped by stakeholder:
    /// Customer first, then Administrator, then System.
    pub fn extract_and_format(&self, description: &str) -> Result<Vec<String>> {
        let requirements = self.extract_requirements(description)?;
        Ok(group_by_stakeholder(requirements)
            .into_iter()
            .map(|r| r.text)
            .collect())
    }
}

impl Default for RequirementsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`RequirementsExtractor`]
#[derive(Default)]
pub struct RequirementsExtractorBuilder {
    analyzer: Option<Arc<dyn Analyzer>>,
    lexicon: Option<Lexicon>,
    config: Option<ExtractorConfig>,
}

impl RequirementsExtractorBuilder {
    /// Use a custom analyzer
    pub fn analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Use a custom lexicon profile
    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Override the pipeline configuration
    pub fn config(mut self, config: ExtractorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the extractor, filling unset parts with defaults
    pub fn build(self) -> RequirementsExtractor {
        RequirementsExtractor {
            analyzer: self
                .analyzer
                .unwrap_or_else(|| Arc::new(HeuristicAnalyzer::new())),
            lexicon: self.lexicon.unwrap_or_else(|| Lexicon::embedded().clone()),
            config: self.config.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_yields_empty_output() {
        let extractor = RequirementsExtractor::new();
        assert!(extractor.extract_requirements("").unwrap().is_empty());
        assert!(extractor.extract_requirements("   \n ").unwrap().is_empty());
        assert!(extractor.extract_and_format("").unwrap().is_empty());
    }

    #[test]
    fn test_builder_defaults() {
        let extractor = RequirementsExtractor::builder().build();
        assert_eq!(extractor.lexicon().code(), "en");
    }

    #[test]
    fn test_extractor_is_shareable_across_threads() {
        let extractor = Arc::new(RequirementsExtractor::new());
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let extractor = Arc::clone(&extractor);
                std::thread::spawn(move || {
                    extractor
                        .extract_requirements(
                            "The customer should book a washing machine.",
                        )
                        .unwrap()
                        .len()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
    }
}
