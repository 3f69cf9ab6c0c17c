//! Stage 5: deduplication and normalization
//!
//! Near-identical drafts collapse onto a comparison key with every
//! non-alphanumeric character stripped; survivors are normalized to open with
//! an approved lead phrase and close with a period.

use crate::config::ExtractorConfig;
use crate::lexicon::Lexicon;
use std::collections::HashSet;

/// Literal phrase fix-ups applied after normalization
const FIXUPS: &[(&str, &str)] = &[
    (" should be able to be able to ", " should be able to "),
    (" should should ", " should "),
    (" shall shall ", " shall "),
];

/// Deduplicate and normalize drafts, preserving first-occurrence order.
pub fn refine_drafts(
    drafts: Vec<String>,
    lexicon: &Lexicon,
    config: &ExtractorConfig,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for draft in drafts {
        if draft.split_whitespace().count() > config.min_draft_words
            && seen.insert(comparison_key(&draft))
        {
            unique.push(draft);
        }
    }

    unique
        .into_iter()
        .map(|draft| normalize(draft, lexicon))
        .collect()
}

/// Lowercased draft with every non-alphanumeric character stripped
fn comparison_key(draft: &str) -> String {
    draft
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

fn normalize(draft: String, lexicon: &Lexicon) -> String {
    let lower = draft.to_lowercase();
    let mut text = if lexicon
        .lead_phrases()
        .iter()
        .any(|phrase| lower.starts_with(phrase.as_str()))
    {
        draft
    } else {
        format!("{}{draft}", lexicon.default_lead())
    };

    if !text.ends_with('.') {
        text.push('.');
    }

    for (from, to) in FIXUPS {
        text = text.replace(from, to);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refine(drafts: &[&str]) -> Vec<String> {
        refine_drafts(
            drafts.iter().map(|d| d.to_string()).collect(),
            Lexicon::embedded(),
            &ExtractorConfig::default(),
        )
    }

    #[test]
    fn test_duplicates_collapse_to_first_occurrence() {
        let refined = refine(&[
            "The customer shall book washing machine",
            "The customer shall book washing machine.",
            "the customer shall BOOK washing machine",
        ]);
        assert_eq!(refined, vec!["The customer shall book washing machine."]);
    }

    #[test]
    fn test_short_drafts_are_dropped() {
        let refined = refine(&["The system shall pay", "The system shall track all orders"]);
        assert_eq!(refined, vec!["The system shall track all orders."]);
    }

    #[test]
    fn test_unapproved_lead_gets_default_prefix() {
        let refined = refine(&["display remaining cycle time to customers"]);
        assert_eq!(
            refined,
            vec!["The system shall display remaining cycle time to customers."]
        );
    }

    #[test]
    fn test_approved_leads_pass_unchanged() {
        let refined = refine(&[
            "The administrator shall monitor payment system for fraud",
            "The customer should receive a pickup notification",
        ]);
        assert_eq!(
            refined,
            vec![
                "The administrator shall monitor payment system for fraud.",
                "The customer should receive a pickup notification.",
            ]
        );
    }

    #[test]
    fn test_stutter_fixups_apply() {
        let refined = refine(&["The system shall shall track usage counts"]);
        assert_eq!(refined, vec!["The system shall track usage counts."]);
    }

    #[test]
    fn test_existing_period_is_not_doubled() {
        let refined = refine(&["The system shall log every completed cycle."]);
        assert_eq!(refined, vec!["The system shall log every completed cycle."]);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let once = refine(&[
            "The customer shall book washing machine",
            "The customer shall book washing machine!",
            "The system shall track drop-off orders",
        ]);
        let twice = refine_drafts(once.clone(), Lexicon::embedded(), &ExtractorConfig::default());
        assert_eq!(once, twice);
    }
}
