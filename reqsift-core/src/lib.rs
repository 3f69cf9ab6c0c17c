//! Heuristic requirement extraction from free-form system descriptions
//!
//! Converts an informal specification paragraph into a structured list of
//! draft software requirements, each tagged with a stakeholder, a
//! functional/non-functional type, and one or more feature categories. The
//! output is a best-effort heuristic draft for an analyst to edit, not a
//! verified specification.
//!
//! # Architecture
//!
//! Six stages run as a strict linear pipeline: sentence segmentation,
//! linguistic feature extraction, heuristic scoring, requirement
//! formulation, refinement, and classification. Linguistic analysis itself
//! (tagging, dependency structure, chunking) sits behind the
//! [`Analyzer`] trait; [`HeuristicAnalyzer`] is the built-in rule-based
//! implementation. Every heuristic table lives in a [`Lexicon`] profile.
//!
//! # Example
//!
//! ```rust
//! use reqsift_core::RequirementsExtractor;
//!
//! let extractor = RequirementsExtractor::new();
//! let requirements = extractor
//!     .extract_and_format(
//!         "The customer should book a washing machine. \
//!          The administrator must monitor the payment system for fraud.",
//!     )
//!     .unwrap();
//!
//! assert_eq!(requirements.len(), 2);
//! assert!(requirements[0].starts_with("The customer"));
//! ```

#![warn(missing_docs)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod pipeline;

// Re-export key types
pub use analysis::{
    AnalysisError, Analyzer, DepLabel, EntitySpan, HeuristicAnalyzer, NounChunk, ParsedSentence,
    PosTag, Token,
};
pub use config::ExtractorConfig;
pub use error::{ExtractError, Result};
pub use lexicon::Lexicon;
pub use pipeline::{
    group_by_stakeholder, ClassifiedRequirement, FeatureRecord, RequirementKind,
    RequirementsExtractor, RequirementsExtractorBuilder, ScoredCandidate, Stakeholder, SvoTriple,
};
