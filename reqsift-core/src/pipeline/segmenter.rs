//! Stage 1: sentence segmentation and length filtering

use crate::analysis::Analyzer;
use crate::config::ExtractorConfig;
use crate::error::Result;
use regex::Regex;
use std::sync::OnceLock;

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern must compile"))
}

/// Split a description into candidate sentences.
///
/// Whitespace runs are collapsed to a single space before boundary detection;
/// sentences at or below the word floor are discarded. Source order is
/// preserved, and empty input yields an empty sequence.
pub fn segment(
    analyzer: &dyn Analyzer,
    config: &ExtractorConfig,
    text: &str,
) -> Result<Vec<String>> {
    let collapsed = whitespace_run().replace_all(text, " ");
    let sentences = analyzer.sentences(collapsed.trim())?;
    Ok(sentences
        .into_iter()
        .filter(|s| s.split_whitespace().count() > config.min_sentence_words)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::HeuristicAnalyzer;

    fn run(text: &str) -> Vec<String> {
        let analyzer = HeuristicAnalyzer::new();
        segment(&analyzer, &ExtractorConfig::default(), text).unwrap()
    }

    #[test]
    fn test_short_sentences_are_dropped() {
        let sentences = run("Fix the pump. The customer should book a washing machine.");
        assert_eq!(sentences, vec!["The customer should book a washing machine."]);
    }

    #[test]
    fn test_whitespace_runs_are_collapsed() {
        let sentences = run("The   customer\n\tshould book   a washing machine.");
        assert_eq!(sentences, vec!["The customer should book a washing machine."]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(run("").is_empty());
        assert!(run(" \n\t ").is_empty());
    }

    #[test]
    fn test_source_order_is_preserved() {
        let sentences = run(
            "The customer should book a washing machine. \
             The administrator must monitor the payment system for fraud.",
        );
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("customer"));
        assert!(sentences[1].contains("administrator"));
    }
}
