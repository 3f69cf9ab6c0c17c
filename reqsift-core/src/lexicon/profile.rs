//! Serde shape of a lexicon profile TOML document

use serde::{Deserialize, Serialize};

/// A full lexicon profile as declared in TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconProfile {
    /// Profile identification
    pub metadata: MetadataSection,
    /// Verb and modal vocabularies
    pub vocabulary: VocabularySection,
    /// Scoring lexicons and weights
    pub scoring: ScoringSection,
    /// Actor term sets for stakeholder detection
    pub actors: ActorSection,
    /// Lead-phrase normalization tables
    pub refinement: RefinementSection,
    /// Classification keyword tables
    pub classification: ClassificationSection,
}

/// Profile identification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataSection {
    /// Language code, e.g. "en"
    pub code: String,
    /// Human-readable profile name
    pub name: String,
}

/// Verb and modal vocabularies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularySection {
    /// Verb lemmas that signal a capability or system action
    pub action_verbs: Vec<String>,
    /// Auxiliaries that signal obligation or capability
    pub modal_verbs: Vec<String>,
}

/// Scoring lexicons and weights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringSection {
    /// Words that often introduce a requirement
    pub requirement_keywords: Vec<String>,
    /// System component mentions
    pub component_keywords: Vec<String>,
    /// User role mentions
    pub role_keywords: Vec<String>,
    /// Per-signal score weights
    pub weights: ScoreWeights,
}

/// Per-signal score weights
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Points per action verb
    pub action_verb: u32,
    /// Points per modal verb
    pub modal: u32,
    /// Points per subject-verb-object pattern
    pub svo: u32,
    /// Points for any requirement-keyword hit
    pub requirement_keyword: u32,
    /// Points for any component-keyword hit
    pub component_keyword: u32,
    /// Points for any role-keyword hit
    pub role_keyword: u32,
}

/// Actor term sets for stakeholder detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorSection {
    /// Terms identifying the customer stakeholder (checked first)
    pub customer: Vec<String>,
    /// Terms identifying the administrator stakeholder
    pub administrator: Vec<String>,
}

/// Lead-phrase normalization tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinementSection {
    /// Lowercased prefixes a requirement may open with
    pub lead_phrases: Vec<String>,
    /// Prefix applied to non-compliant requirements
    pub default_lead: String,
}

/// Classification keyword tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationSection {
    /// Keywords marking a requirement as non-functional
    pub nonfunctional_keywords: Vec<String>,
    /// Category taxonomy; declaration order is the reporting order
    pub categories: Vec<Category>,
}

/// One category of the feature taxonomy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Category display name
    pub name: String,
    /// Keywords whose presence assigns the category
    pub keywords: Vec<String>,
}
