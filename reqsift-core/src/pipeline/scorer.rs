//! Stage 3: heuristic requirement scoring
//!
//! A fixed linear heuristic, not a trained model; the weights, lexicons, and
//! threshold must reproduce the reference behavior exactly.

use super::features::FeatureRecord;
use crate::config::ExtractorConfig;
use crate::lexicon::{contains_any, Lexicon};

/// A feature record with its attached requirement score
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    /// The underlying feature record
    pub record: FeatureRecord,
    /// Non-negative heuristic relevance score
    pub score: u32,
}

/// Score one feature record
pub fn score_record(record: &FeatureRecord, lexicon: &Lexicon) -> u32 {
    let weights = lexicon.weights();
    let mut score = 0;

    score += weights.action_verb * record.action_verbs.len() as u32;
    score += weights.modal * record.modals.len() as u32;
    score += weights.svo * record.svo_patterns.len() as u32;

    let lower = record.sentence.to_lowercase();
    if contains_any(&lower, lexicon.requirement_keywords()) {
        score += weights.requirement_keyword;
    }
    if contains_any(&lower, lexicon.component_keywords()) {
        score += weights.component_keyword;
    }
    if contains_any(&lower, lexicon.role_keywords()) {
        score += weights.role_keyword;
    }

    score
}

/// Score, filter, and rank candidates.
///
/// Only candidates scoring strictly above the threshold survive, sorted
/// descending; the sort is stable, so extraction order breaks ties.
pub fn rank_candidates(
    records: Vec<FeatureRecord>,
    lexicon: &Lexicon,
    config: &ExtractorConfig,
) -> Vec<ScoredCandidate> {
    let mut candidates: Vec<ScoredCandidate> = records
        .into_iter()
        .map(|record| {
            let score = score_record(&record, lexicon);
            ScoredCandidate { record, score }
        })
        .collect();
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.retain(|c| c.score > config.score_threshold);
    candidates
}
