//! Pipeline configuration

/// Tuning knobs for a [`RequirementsExtractor`](crate::RequirementsExtractor)
///
/// The defaults reproduce the reference heuristics; scoring weights and
/// keyword tables live in the [`Lexicon`](crate::Lexicon) profile instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Sentences must have strictly more whitespace-delimited words than this
    pub min_sentence_words: usize,
    /// Candidates must score strictly above this to survive
    pub score_threshold: u32,
    /// Drafts must have strictly more words than this to enter deduplication
    pub min_draft_words: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_sentence_words: 5,
            score_threshold: 3,
            min_draft_words: 4,
        }
    }
}
