//! Stage 4: draft requirement formulation
//!
//! Synthesizes "The X shall Y Z" drafts from actor/action/object extraction,
//! with a lowercased-sentence fallback when the structure is incomplete.

use super::scorer::ScoredCandidate;
use crate::analysis::DepLabel;
use crate::lexicon::Lexicon;

/// Formulate one draft requirement from a scored candidate.
///
/// Always returns a non-empty string opening with "The customer",
/// "The administrator", or "The system". When both customer-like and
/// administrator-like actors appear, the customer wins.
pub fn formulate_draft(candidate: &ScoredCandidate, lexicon: &Lexicon) -> String {
    let record = &candidate.record;
    let parse = &record.parse;

    let actors: Vec<&str> = parse
        .chunks_with_root_dep(DepLabel::NominalSubject)
        .map(|c| c.text.as_str())
        .collect();

    let primary_actor = if matches_term(&actors, lexicon.customer_terms()) {
        "The customer"
    } else if matches_term(&actors, lexicon.administrator_terms()) {
        "The administrator"
    } else {
        "The system"
    };

    let has_action = !record.action_verbs.is_empty() || !record.verbs.is_empty();
    let action = record
        .action_verbs
        .first()
        .or_else(|| record.verbs.first())
        .map(String::as_str)
        .unwrap_or("support");

    let objects: Vec<&str> = parse
        .chunks
        .iter()
        .filter(|c| {
            matches!(
                parse.chunk_root(c).dep,
                DepLabel::DirectObject | DepLabel::PrepObject
            )
        })
        .map(|c| c.text.as_str())
        .collect();

    let mut draft = if !actors.is_empty() && has_action && !objects.is_empty() {
        format!("{primary_actor} shall {action} {}", objects[0])
    } else {
        format!(
            "{primary_actor} shall {action} {}",
            record.sentence.to_lowercase()
        )
    };
    draft = draft.replace("  ", " ").trim().to_string();

    // append prepositional context not already present
    for chunk in parse.chunks_with_root_dep(DepLabel::PrepObject) {
        if !draft.contains(&chunk.text) && !draft.ends_with('.') {
            draft.push_str(&format!(" for {}", chunk.text));
        }
    }

    draft
}

fn matches_term(actors: &[&str], terms: &[String]) -> bool {
    actors
        .iter()
        .any(|actor| terms.iter().any(|term| actor.to_lowercase() == *term))
}
