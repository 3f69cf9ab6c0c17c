//! Parse data model shared by every analyzer implementation
//!
//! A [`ParsedSentence`] is the immutable handle later pipeline stages re-query
//! for noun chunks and dependency roles, so one analysis pass serves the whole
//! pipeline.

/// Coarse part-of-speech tag
///
/// Only `Verb` and `Noun` are load-bearing for the pipeline; the rest exist so
/// analyzers can express enough structure for chunking and dependency
/// assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// Common noun
    Noun,
    /// Proper noun (entity material)
    ProperNoun,
    /// Main verb
    Verb,
    /// Auxiliary or modal verb
    Auxiliary,
    /// Adjective or nominal modifier
    Adjective,
    /// Adverb
    Adverb,
    /// Determiner, including possessives
    Determiner,
    /// Preposition
    Preposition,
    /// Personal or relative pronoun
    Pronoun,
    /// Coordinating conjunction
    Conjunction,
    /// Numeric literal
    Number,
    /// Punctuation token
    Punctuation,
    /// Anything else
    Other,
}

impl PosTag {
    /// Whether this tag can anchor a noun chunk
    pub fn is_nominal(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun | PosTag::Pronoun)
    }
}

/// Grammatical dependency label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepLabel {
    /// Nominal subject of a verb (nsubj)
    NominalSubject,
    /// Direct object of a verb (dobj)
    DirectObject,
    /// Object of a preposition (pobj)
    PrepObject,
    /// Auxiliary attached to a verb (aux)
    Auxiliary,
    /// Preposition attached to a verb or noun
    Preposition,
    /// Determiner attached to a nominal
    Determiner,
    /// Adjectival or nominal modifier
    Modifier,
    /// Sentence root
    Root,
    /// Coordinated verb after the root
    Conjunct,
    /// Unassigned
    Other,
}

/// A single analyzed token
#[derive(Debug, Clone)]
pub struct Token {
    /// Surface form as it appeared in the sentence
    pub text: String,
    /// Dictionary base form
    pub lemma: String,
    /// Coarse part-of-speech tag
    pub pos: PosTag,
    /// Dependency label
    pub dep: DepLabel,
    /// Index of the syntactic head token (self-referential for roots)
    pub head: usize,
}

/// A maximal noun phrase span
#[derive(Debug, Clone)]
pub struct NounChunk {
    /// Chunk surface text
    pub text: String,
    /// Index of the first token in the span
    pub start: usize,
    /// Index one past the last token in the span
    pub end: usize,
    /// Index of the chunk's root token
    pub root: usize,
}

/// A recognized named-entity span
#[derive(Debug, Clone)]
pub struct EntitySpan {
    /// Entity surface text
    pub text: String,
    /// Index of the first token in the span
    pub start: usize,
    /// Index one past the last token in the span
    pub end: usize,
}

/// Full analysis of one sentence
#[derive(Debug, Clone)]
pub struct ParsedSentence {
    /// The sentence as analyzed
    pub text: String,
    /// Tokens in sentence order
    pub tokens: Vec<Token>,
    /// Noun chunks in sentence order
    pub chunks: Vec<NounChunk>,
    /// Named-entity spans in sentence order
    pub entities: Vec<EntitySpan>,
}

impl ParsedSentence {
    /// Root token of a noun chunk
    pub fn chunk_root(&self, chunk: &NounChunk) -> &Token {
        &self.tokens[chunk.root]
    }

    /// Noun chunks whose root carries the given dependency label
    pub fn chunks_with_root_dep(&self, dep: DepLabel) -> impl Iterator<Item = &NounChunk> + '_ {
        self.chunks
            .iter()
            .filter(move |chunk| self.tokens[chunk.root].dep == dep)
    }

    /// Head token of the given token
    pub fn head_of(&self, token: &Token) -> &Token {
        &self.tokens[token.head]
    }
}
