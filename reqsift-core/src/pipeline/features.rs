//! Stage 2: linguistic feature extraction

use crate::analysis::{Analyzer, DepLabel, ParsedSentence, PosTag};
use crate::error::Result;
use crate::lexicon::Lexicon;
use std::sync::Arc;

/// A (subject, verb, object) pattern inferred from dependency structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvoTriple {
    /// Subject noun chunk text
    pub subject: String,
    /// Verb lemma
    pub verb: String,
    /// Object token text
    pub object: String,
}

/// Feature record derived from one candidate sentence
///
/// The attached parse is shared read-only with later stages, which re-query
/// it for noun chunks and dependency roles instead of re-analyzing.
#[derive(Debug, Clone)]
pub struct FeatureRecord {
    /// The source sentence
    pub sentence: String,
    /// Lemma of every VERB token, in token order
    pub verbs: Vec<String>,
    /// Subset of `verbs` found in the action-verb vocabulary
    pub action_verbs: Vec<String>,
    /// Surface text of every NOUN token, in token order
    pub nouns: Vec<String>,
    /// Surface text of every named-entity span, in order
    pub entities: Vec<String>,
    /// Subject-verb-object patterns, in chunk order
    pub svo_patterns: Vec<SvoTriple>,
    /// Modal auxiliaries, in token order
    pub modals: Vec<String>,
    /// Shared handle to the underlying parse
    pub parse: Arc<ParsedSentence>,
}

/// Derive the feature record for one sentence.
///
/// A sentence with no matches for some category yields an empty sequence for
/// that category; this is not an error.
pub fn extract_features(
    analyzer: &dyn Analyzer,
    lexicon: &Lexicon,
    sentence: &str,
) -> Result<FeatureRecord> {
    let parse = Arc::new(analyzer.parse(sentence)?);

    let verbs: Vec<String> = parse
        .tokens
        .iter()
        .filter(|t| t.pos == PosTag::Verb)
        .map(|t| t.lemma.clone())
        .collect();

    let action_verbs: Vec<String> = verbs
        .iter()
        .filter(|v| lexicon.is_action_verb(v))
        .cloned()
        .collect();

    let nouns: Vec<String> = parse
        .tokens
        .iter()
        .filter(|t| t.pos == PosTag::Noun)
        .map(|t| t.text.clone())
        .collect();

    let entities: Vec<String> = parse.entities.iter().map(|e| e.text.clone()).collect();

    let svo_patterns = svo_patterns(&parse);

    let modals: Vec<String> = parse
        .tokens
        .iter()
        .filter(|t| t.dep == DepLabel::Auxiliary && lexicon.is_modal(&t.text.to_lowercase()))
        .map(|t| t.text.clone())
        .collect();

    Ok(FeatureRecord {
        sentence: sentence.to_string(),
        verbs,
        action_verbs,
        nouns,
        entities,
        svo_patterns,
        modals,
        parse,
    })
}

/// For every noun chunk whose root is a nominal subject of a verb, emit one
/// triple per object token attached to that verb.
fn svo_patterns(parse: &ParsedSentence) -> Vec<SvoTriple> {
    let mut patterns = Vec::new();
    for chunk in &parse.chunks {
        let root = parse.chunk_root(chunk);
        if root.dep != DepLabel::NominalSubject {
            continue;
        }
        let verb_idx = root.head;
        let verb = &parse.tokens[verb_idx];
        if verb.pos != PosTag::Verb {
            continue;
        }
        for token in &parse.tokens {
            if token.head == verb_idx
                && matches!(token.dep, DepLabel::DirectObject | DepLabel::PrepObject)
            {
                patterns.push(SvoTriple {
                    subject: chunk.text.clone(),
                    verb: verb.lemma.clone(),
                    object: token.text.clone(),
                });
            }
        }
    }
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::HeuristicAnalyzer;

    fn extract(sentence: &str) -> FeatureRecord {
        let analyzer = HeuristicAnalyzer::new();
        extract_features(&analyzer, Lexicon::embedded(), sentence).unwrap()
    }

    #[test]
    fn test_modal_sentence_features() {
        let record = extract("The customer should book a washing machine.");
        assert_eq!(record.verbs, vec!["book"]);
        assert_eq!(record.action_verbs, vec!["book"]);
        assert_eq!(record.modals, vec!["should"]);
        assert_eq!(record.nouns, vec!["customer", "machine"]);
        assert_eq!(
            record.svo_patterns,
            vec![SvoTriple {
                subject: "customer".to_string(),
                verb: "book".to_string(),
                object: "machine".to_string(),
            }]
        );
    }

    #[test]
    fn test_non_action_verbs_are_not_action_verbs() {
        let record = extract("Customers often walk to the nearest branch.");
        assert!(record.verbs.contains(&"walk".to_string()));
        assert!(record.action_verbs.is_empty());
    }

    #[test]
    fn test_sentence_without_signals_has_empty_features() {
        let record = extract("Seven green bottles hanging quietly beside the wall.");
        assert!(record.verbs.is_empty());
        assert!(record.action_verbs.is_empty());
        assert!(record.modals.is_empty());
        assert!(record.svo_patterns.is_empty());
    }

    #[test]
    fn test_multiple_objects_yield_multiple_triples() {
        // both objects attach to "book" inside one clause
        let record = extract("The customer should book machines of dryers.");
        let verbs: Vec<_> = record.svo_patterns.iter().map(|p| p.verb.as_str()).collect();
        assert!(verbs.iter().all(|v| *v == "book"));
        assert!(record.svo_patterns.len() >= 1);
    }
}
