//! Chunking and positional dependency heuristics
//!
//! Dependency assignment is clause-local and asymmetric: looking backward
//! for a governing verb stops at punctuation and coordinating conjunctions,
//! while looking forward stops at punctuation only, so coordinated subjects
//! ("the customer and the owner must check") still reach their shared verb.

use crate::analysis::types::{DepLabel, PosTag};

/// A detected noun phrase span (token indices, end exclusive)
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChunkSpan {
    pub start: usize,
    pub end: usize,
    pub root: usize,
}

/// Maximal adjective/numeral/nominal runs, trimmed to end at their last
/// nominal. The root is that last nominal; leading determiners are not part
/// of the chunk.
pub(crate) fn noun_chunks(tags: &[PosTag]) -> Vec<ChunkSpan> {
    let mut chunks = Vec::new();
    let mut i = 0;
    while i < tags.len() {
        if !chunk_member(tags[i]) {
            i += 1;
            continue;
        }
        let start = i;
        let mut j = i;
        while j < tags.len() && chunk_member(tags[j]) {
            j += 1;
        }
        if let Some(root) = (start..j).rev().find(|&k| tags[k].is_nominal()) {
            chunks.push(ChunkSpan {
                start,
                end: root + 1,
                root,
            });
        }
        i = j;
    }
    chunks
}

fn chunk_member(tag: PosTag) -> bool {
    tag.is_nominal() || matches!(tag, PosTag::Adjective | PosTag::Number)
}

/// Assign a dependency label and head index to every token
pub(crate) fn assign_deps(tags: &[PosTag], chunks: &[ChunkSpan]) -> (Vec<DepLabel>, Vec<usize>) {
    let n = tags.len();
    let mut deps = vec![DepLabel::Other; n];
    let mut heads: Vec<usize> = (0..n).collect();

    let first_verb = tags.iter().position(|t| *t == PosTag::Verb);

    for i in 0..n {
        match tags[i] {
            PosTag::Auxiliary => {
                deps[i] = DepLabel::Auxiliary;
                if let Some(verb) = next_verb(tags, i + 1) {
                    heads[i] = verb;
                }
            }
            PosTag::Preposition => {
                deps[i] = DepLabel::Preposition;
                if let Some(verb) = prev_verb(tags, i) {
                    heads[i] = verb;
                }
            }
            PosTag::Determiner => {
                deps[i] = DepLabel::Determiner;
                if let Some(nominal) = (i + 1..n).find(|&j| tags[j].is_nominal()) {
                    heads[i] = nominal;
                }
            }
            PosTag::Adjective => {
                deps[i] = DepLabel::Modifier;
                if let Some(nominal) = (i + 1..n).find(|&j| tags[j].is_nominal()) {
                    heads[i] = nominal;
                }
            }
            PosTag::Verb => {
                if Some(i) == first_verb {
                    deps[i] = DepLabel::Root;
                } else {
                    deps[i] = DepLabel::Conjunct;
                    if let Some(root) = first_verb {
                        heads[i] = root;
                    }
                }
            }
            _ => {}
        }
    }

    for chunk in chunks {
        let root = chunk.root;
        if let Some(prep) = governing_preposition(tags, chunk.start) {
            deps[root] = DepLabel::PrepObject;
            heads[root] = prep;
            continue;
        }
        match (prev_verb(tags, chunk.start), next_verb(tags, chunk.end)) {
            (None, Some(verb)) => {
                deps[root] = DepLabel::NominalSubject;
                heads[root] = verb;
            }
            (Some(verb), _) => {
                deps[root] = DepLabel::DirectObject;
                heads[root] = verb;
            }
            (None, None) => {}
        }
    }

    (deps, heads)
}

/// Maximal proper-noun runs
pub(crate) fn entity_spans(tags: &[PosTag]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut i = 0;
    while i < tags.len() {
        if tags[i] != PosTag::ProperNoun {
            i += 1;
            continue;
        }
        let start = i;
        while i < tags.len() && tags[i] == PosTag::ProperNoun {
            i += 1;
        }
        spans.push((start, i));
    }
    spans
}

/// Preposition governing a chunk, looking back over determiners and numerals
fn governing_preposition(tags: &[PosTag], chunk_start: usize) -> Option<usize> {
    let mut i = chunk_start;
    while i > 0 && matches!(tags[i - 1], PosTag::Determiner | PosTag::Number) {
        i -= 1;
    }
    (i > 0 && tags[i - 1] == PosTag::Preposition).then(|| i - 1)
}

/// Nearest verb after `from`, stopping at punctuation
fn next_verb(tags: &[PosTag], from: usize) -> Option<usize> {
    for j in from..tags.len() {
        if tags[j] == PosTag::Punctuation {
            return None;
        }
        if tags[j] == PosTag::Verb {
            return Some(j);
        }
    }
    None
}

/// Nearest verb before `from`, stopping at punctuation and conjunctions
fn prev_verb(tags: &[PosTag], from: usize) -> Option<usize> {
    for j in (0..from).rev() {
        if matches!(tags[j], PosTag::Punctuation | PosTag::Conjunction) {
            return None;
        }
        if tags[j] == PosTag::Verb {
            return Some(j);
        }
    }
    None
}
