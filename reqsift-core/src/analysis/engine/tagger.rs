//! Word-table part-of-speech tagger
//!
//! A lexical pass assigns tags from closed-class tables, the verb vocabulary,
//! and suffix shape; contextual fix-up passes then repair the ambiguous cases
//! (gerund modifiers, nominal verb uses, stranded auxiliaries).

use super::lemmatizer;
use crate::analysis::types::PosTag;
use std::collections::HashSet;

pub(crate) const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "any", "some", "no",
    "all", "both", "its", "their", "his", "her", "my", "your", "our",
];

pub(crate) const MODAL_AUXILIARIES: &[&str] = &[
    "should", "must", "will", "can", "could", "would", "may", "might", "shall",
];

pub(crate) const PLAIN_AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "do", "does", "did", "have", "has",
    "had",
];

pub(crate) const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "for", "with", "from", "to", "of", "by", "through", "via", "within",
    "into", "onto", "before", "after", "during", "between", "under", "over", "about",
    "against", "beside", "without", "upon", "around",
];

pub(crate) const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "who", "whom",
    "someone", "anyone", "everyone",
];

pub(crate) const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet", "so"];

pub(crate) const COMMON_ADVERBS: &[&str] = &[
    "not", "also", "then", "once", "still", "never", "always", "already", "currently", "soon",
    "often", "again", "here", "there", "together",
];

pub(crate) const COMMON_ADJECTIVES: &[&str] = &[
    "available", "unique", "online", "prepaid", "designated", "remaining", "new", "mobile",
    "self-service", "ready", "free", "multiple", "several", "valid", "invalid", "active",
];

/// Open-class verb vocabulary consulted after lemmatization
pub(crate) const VERB_LEXICON: &[&str] = &[
    "allow", "enable", "provide", "support", "manage", "monitor", "check", "view", "book",
    "pay", "receive", "create", "track", "generate", "use", "make", "select", "choose",
    "start", "stop", "display", "send", "move", "leave", "wash", "dry", "fold", "assign",
    "notify", "maintain", "flag", "update", "schedule", "reserve", "need", "require", "offer",
    "finish", "remove", "walk", "complete", "access", "process", "record", "cost", "work",
    "go", "buy", "get", "take", "give", "run", "help", "want", "ensure", "submit", "cancel",
    "review", "order", "pick", "collect", "store", "charge", "refund", "alert", "log",
    "report", "clean", "repair", "service", "operate", "register", "sign", "search", "find",
    "browse", "add", "delete", "edit", "save", "open", "close", "lock", "unlock", "keep",
    "tell", "say", "see", "handle", "accept", "reject", "confirm", "verify", "print", "scan",
];

pub(crate) fn is_known_verb(lemma: &str) -> bool {
    VERB_LEXICON.contains(&lemma)
}

/// Tag every token and return (tags, lemmas)
pub(crate) fn tag(words: &[String], stopwords: &HashSet<String>) -> (Vec<PosTag>, Vec<String>) {
    let mut tags: Vec<PosTag> = words
        .iter()
        .map(|word| lexical_tag(word, stopwords))
        .collect();

    fix_proper_nouns(words, &mut tags);
    fix_nominal_verb_uses(words, &mut tags);
    fix_verbs_after_auxiliary(&mut tags);
    fix_stranded_auxiliaries(&mut tags);

    let lemmas = words
        .iter()
        .zip(&tags)
        .map(|(word, tag)| match tag {
            PosTag::Verb | PosTag::Auxiliary => lemmatizer::verb_lemma(word, is_known_verb),
            PosTag::Noun | PosTag::ProperNoun => lemmatizer::noun_lemma(word),
            _ => word.to_lowercase(),
        })
        .collect();

    (tags, lemmas)
}

fn lexical_tag(word: &str, stopwords: &HashSet<String>) -> PosTag {
    if !word.chars().any(char::is_alphanumeric) {
        return PosTag::Punctuation;
    }
    let lower = word.to_lowercase();
    if lower.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        && lower.chars().any(|c| c.is_ascii_digit())
    {
        return PosTag::Number;
    }
    let lower = lower.as_str();
    if DETERMINERS.contains(&lower) {
        return PosTag::Determiner;
    }
    if MODAL_AUXILIARIES.contains(&lower) || PLAIN_AUXILIARIES.contains(&lower) {
        return PosTag::Auxiliary;
    }
    if PREPOSITIONS.contains(&lower) {
        return PosTag::Preposition;
    }
    if PRONOUNS.contains(&lower) {
        return PosTag::Pronoun;
    }
    if CONJUNCTIONS.contains(&lower) {
        return PosTag::Conjunction;
    }
    if COMMON_ADJECTIVES.contains(&lower) {
        return PosTag::Adjective;
    }
    if COMMON_ADVERBS.contains(&lower) || (lower.len() > 3 && lower.ends_with("ly")) {
        return PosTag::Adverb;
    }
    if is_known_verb(&lemmatizer::verb_lemma(lower, is_known_verb)) {
        return PosTag::Verb;
    }
    if stopwords.contains(lower) {
        return PosTag::Other;
    }
    PosTag::Noun
}

/// Capitalized non-initial nouns are entity material
fn fix_proper_nouns(words: &[String], tags: &mut [PosTag]) {
    for i in 1..words.len() {
        if tags[i] == PosTag::Noun
            && words[i].chars().next().is_some_and(char::is_uppercase)
        {
            tags[i] = PosTag::ProperNoun;
        }
    }
}

/// A verb directly after a determiner or adjective is being used nominally:
/// "a booking system" / "an online payment". Gerunds modifying a following
/// nominal become adjectives, everything else becomes a noun.
fn fix_nominal_verb_uses(words: &[String], tags: &mut [PosTag]) {
    for i in 1..words.len() {
        if tags[i] != PosTag::Verb {
            continue;
        }
        let Some(prev) = prev_skipping_adverbs(tags, i) else {
            continue;
        };
        if !matches!(tags[prev], PosTag::Determiner | PosTag::Adjective) {
            continue;
        }
        let next_is_nominal = tags
            .get(i + 1)
            .is_some_and(|t| matches!(t, PosTag::Noun | PosTag::ProperNoun));
        if next_is_nominal && words[i].to_lowercase().ends_with("ing") {
            tags[i] = PosTag::Adjective;
        } else {
            tags[i] = PosTag::Noun;
        }
    }
}

/// A nominal directly after an auxiliary is a verb the lexicon does not know
fn fix_verbs_after_auxiliary(tags: &mut [PosTag]) {
    for i in 1..tags.len() {
        if !matches!(tags[i], PosTag::Noun | PosTag::ProperNoun | PosTag::Other) {
            continue;
        }
        if let Some(prev) = prev_skipping_adverbs(tags, i) {
            if tags[prev] == PosTag::Auxiliary {
                tags[i] = PosTag::Verb;
            }
        }
    }
}

/// An auxiliary with no verb anywhere after it is the main verb ("each
/// machine has a unique identifier")
fn fix_stranded_auxiliaries(tags: &mut [PosTag]) {
    for i in 0..tags.len() {
        if tags[i] == PosTag::Auxiliary && !tags[i + 1..].contains(&PosTag::Verb) {
            tags[i] = PosTag::Verb;
        }
    }
}

fn prev_skipping_adverbs(tags: &[PosTag], i: usize) -> Option<usize> {
    (0..i).rev().find(|&j| tags[j] != PosTag::Adverb)
}
