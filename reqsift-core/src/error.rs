//! Crate-level error types
//!
//! A pipeline run either fully succeeds (possibly with zero requirements) or
//! fails at the analysis step; there is no partial-result accumulation.

use crate::analysis::AnalysisError;
use thiserror::Error;

/// Errors surfaced by requirement extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Linguistic analysis failed; fatal for the whole description
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Lexicon profile rejected at load time
    #[error("invalid lexicon profile: {reason}")]
    InvalidProfile {
        /// Why the profile was rejected
        reason: String,
    },

    /// Lexicon profile file could not be read or parsed
    #[error("lexicon profile {path}: {reason}")]
    ProfileFile {
        /// Path of the offending profile
        path: String,
        /// The underlying read or parse failure
        reason: String,
    },
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_profile_display() {
        let err = ExtractError::InvalidProfile {
            reason: "empty action verb list".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid lexicon profile: empty action verb list"
        );
    }

    #[test]
    fn test_analysis_error_conversion() {
        let err: ExtractError = AnalysisError::ModelUnavailable("no model".to_string()).into();
        assert!(matches!(err, ExtractError::Analysis(_)));
        assert_eq!(err.to_string(), "analysis error: model unavailable: no model");
    }
}
