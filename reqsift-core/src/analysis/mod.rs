//! Linguistic-analysis collaborator contract
//!
//! The pipeline never performs tokenization, tagging, or dependency parsing
//! itself; it consumes the [`Analyzer`] trait. [`HeuristicAnalyzer`] is the
//! built-in rule-based implementation; anything that can produce a
//! [`ParsedSentence`] (an FFI-backed tagger, a service client) can stand in
//! for it.

pub mod engine;
pub mod stopwords;
pub mod types;

pub use engine::HeuristicAnalyzer;
pub use types::{DepLabel, EntitySpan, NounChunk, ParsedSentence, PosTag, Token};

use std::collections::HashSet;
use thiserror::Error;

/// Errors raised by an analysis engine
///
/// Analysis failures are fatal for the description being processed; the
/// pipeline never retries or degrades.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The model or resource backing the engine is unavailable
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    /// The engine could not analyze the given input
    #[error("cannot analyze input: {0}")]
    Unanalyzable(String),
}

/// Result type for analysis operations
pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;

/// Contract for the linguistic-analysis engine
///
/// Implementations must be safe for concurrent read-only use: one engine
/// instance is constructed at startup and shared across requests behind an
/// `Arc`, with no per-request mutation.
pub trait Analyzer: Send + Sync {
    /// Split text into sentences using language-aware boundary detection
    fn sentences(&self, text: &str) -> AnalysisResult<Vec<String>>;

    /// Produce the full per-token analysis of one sentence
    fn parse(&self, sentence: &str) -> AnalysisResult<ParsedSentence>;

    /// General-purpose English stopword list
    ///
    /// Required by the engine contract; the scoring pipeline does not consume
    /// it, but implementations and callers may.
    fn stopwords(&self) -> &HashSet<String>;
}
