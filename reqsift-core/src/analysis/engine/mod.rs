//! Built-in rule-based analyzer
//!
//! A deterministic, dependency-free stand-in for a statistical NLP engine.
//! It covers what the pipeline contract needs: sentence boundaries, coarse
//! POS tags with VERB/NOUN distinguished, clause-local dependency labels,
//! noun chunks, entity spans, and a stopword set.

mod grammar;
mod lemmatizer;
mod tagger;

use super::stopwords::stopword_set;
use super::types::{EntitySpan, NounChunk, ParsedSentence, Token};
use super::{AnalysisResult, Analyzer};
use std::collections::HashSet;

/// Sentence terminator characters
const TERMINATORS: &[char] = &['.', '!', '?'];

/// Words a trailing period does not terminate a sentence after
const ABBREVIATIONS: &[&str] = &[
    "etc", "vs", "dr", "mr", "mrs", "ms", "prof", "inc", "ltd", "no", "fig", "approx",
];

/// Rule-based [`Analyzer`] implementation
#[derive(Debug)]
pub struct HeuristicAnalyzer {
    stopwords: HashSet<String>,
}

impl HeuristicAnalyzer {
    /// Create an analyzer with the embedded English tables
    pub fn new() -> Self {
        Self {
            stopwords: stopword_set(),
        }
    }

    fn parse_sentence(&self, sentence: &str) -> ParsedSentence {
        let words = tokenize(sentence);
        let (tags, lemmas) = tagger::tag(&words, &self.stopwords);
        let chunk_spans = grammar::noun_chunks(&tags);
        let (deps, heads) = grammar::assign_deps(&tags, &chunk_spans);

        let tokens = words
            .iter()
            .zip(&lemmas)
            .zip(tags.iter().zip(deps.iter().zip(&heads)))
            .map(|((text, lemma), (pos, (dep, head)))| Token {
                text: text.clone(),
                lemma: lemma.clone(),
                pos: *pos,
                dep: *dep,
                head: *head,
            })
            .collect();

        let chunks = chunk_spans
            .iter()
            .map(|span| NounChunk {
                text: words[span.start..span.end].join(" "),
                start: span.start,
                end: span.end,
                root: span.root,
            })
            .collect();

        let entities = grammar::entity_spans(&tags)
            .into_iter()
            .map(|(start, end)| EntitySpan {
                text: words[start..end].join(" "),
                start,
                end,
            })
            .collect();

        ParsedSentence {
            text: sentence.to_string(),
            tokens,
            chunks,
            entities,
        }
    }
}

impl Default for HeuristicAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for HeuristicAnalyzer {
    fn sentences(&self, text: &str) -> AnalysisResult<Vec<String>> {
        Ok(split_sentences(text))
    }

    fn parse(&self, sentence: &str) -> AnalysisResult<ParsedSentence> {
        Ok(self.parse_sentence(sentence))
    }

    fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }
}

/// Split text on terminators, holding back decimals, initials, and
/// abbreviations, and requiring the next sentence to open with an uppercase
/// letter or digit.
fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        current.push(ch);
        if TERMINATORS.contains(&ch) && is_sentence_boundary(&chars, i) {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }
    let rest = current.trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }
    sentences
}

fn is_sentence_boundary(chars: &[char], i: usize) -> bool {
    if chars[i] == '.' {
        // decimal point
        let prev = i.checked_sub(1).map(|j| chars[j]);
        let next = chars.get(i + 1).copied();
        if prev.is_some_and(|c| c.is_ascii_digit()) && next.is_some_and(|c| c.is_ascii_digit()) {
            return false;
        }
        // word before the dot: single letters are initials
        let word: String = chars[..i]
            .iter()
            .rev()
            .take_while(|c| c.is_alphabetic())
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        if word.chars().count() == 1 {
            return false;
        }
        if ABBREVIATIONS.contains(&word.to_lowercase().as_str()) {
            return false;
        }
    }
    // the following sentence must open with uppercase or a digit
    match chars[i + 1..].iter().find(|c| !c.is_whitespace()) {
        None => true,
        Some(c) => c.is_uppercase() || c.is_ascii_digit() || matches!(c, '"' | '\''),
    }
}

/// Split a sentence into word and punctuation tokens; possessive "'s" comes
/// off as its own token.
fn tokenize(sentence: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    for ch in sentence.chars() {
        if ch.is_alphanumeric() || ch == '-' || ch == '\'' {
            word.push(ch);
        } else {
            flush_word(&mut word, &mut tokens);
            if !ch.is_whitespace() {
                tokens.push(ch.to_string());
            }
        }
    }
    flush_word(&mut word, &mut tokens);
    tokens
}

fn flush_word(word: &mut String, tokens: &mut Vec<String>) {
    if word.is_empty() {
        return;
    }
    if let Some(base) = word.strip_suffix("'s") {
        if !base.is_empty() {
            tokens.push(base.to_string());
            tokens.push("'s".to_string());
            word.clear();
            return;
        }
    }
    tokens.push(std::mem::take(word));
}
