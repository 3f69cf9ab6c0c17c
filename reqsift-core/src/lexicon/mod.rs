//! Heuristic lookup tables
//!
//! Every vocabulary, keyword lexicon, weight, and taxonomy the pipeline
//! consults is declared in one TOML profile, so the heuristics are tunable
//! without touching control flow. The English profile is embedded at compile
//! time; custom profiles can be loaded from disk.

pub mod profile;

pub use profile::{Category, LexiconProfile, ScoreWeights};

use crate::error::{ExtractError, Result};
use std::path::Path;
use std::sync::OnceLock;

static EMBEDDED: OnceLock<Lexicon> = OnceLock::new();

const ENGLISH_PROFILE: &str = include_str!("../../configs/lexicon/english.toml");

/// Validated lexicon profile
#[derive(Debug, Clone)]
pub struct Lexicon {
    profile: LexiconProfile,
}

impl Lexicon {
    /// The embedded English profile
    pub fn embedded() -> &'static Lexicon {
        EMBEDDED.get_or_init(|| {
            Lexicon::from_toml_str(ENGLISH_PROFILE).expect("embedded lexicon profile must parse")
        })
    }

    /// Parse and validate a profile from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let profile: LexiconProfile =
            toml::from_str(toml_str).map_err(|e| ExtractError::InvalidProfile {
                reason: e.to_string(),
            })?;
        validate(&profile).map_err(|reason| ExtractError::InvalidProfile { reason })?;
        Ok(Self { profile })
    }

    /// Load and validate a profile from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ExtractError::ProfileFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text).map_err(|e| ExtractError::ProfileFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Language code of the profile
    pub fn code(&self) -> &str {
        &self.profile.metadata.code
    }

    /// Human-readable profile name
    pub fn name(&self) -> &str {
        &self.profile.metadata.name
    }

    /// Whether a verb lemma is in the action-verb vocabulary
    pub fn is_action_verb(&self, lemma: &str) -> bool {
        self.profile
            .vocabulary
            .action_verbs
            .iter()
            .any(|v| v == lemma)
    }

    /// Whether a lowercased word is in the modal vocabulary
    pub fn is_modal(&self, word: &str) -> bool {
        self.profile.vocabulary.modal_verbs.iter().any(|m| m == word)
    }

    /// Scoring weights
    pub fn weights(&self) -> &ScoreWeights {
        &self.profile.scoring.weights
    }

    /// Requirement-signal keywords
    pub fn requirement_keywords(&self) -> &[String] {
        &self.profile.scoring.requirement_keywords
    }

    /// System-component keywords
    pub fn component_keywords(&self) -> &[String] {
        &self.profile.scoring.component_keywords
    }

    /// User-role keywords
    pub fn role_keywords(&self) -> &[String] {
        &self.profile.scoring.role_keywords
    }

    /// Terms identifying the customer stakeholder
    pub fn customer_terms(&self) -> &[String] {
        &self.profile.actors.customer
    }

    /// Terms identifying the administrator stakeholder
    pub fn administrator_terms(&self) -> &[String] {
        &self.profile.actors.administrator
    }

    /// Approved lowercased lead phrases
    pub fn lead_phrases(&self) -> &[String] {
        &self.profile.refinement.lead_phrases
    }

    /// Prefix applied to requirements with no approved lead phrase
    pub fn default_lead(&self) -> &str {
        &self.profile.refinement.default_lead
    }

    /// Keywords marking a requirement as non-functional
    pub fn nonfunctional_keywords(&self) -> &[String] {
        &self.profile.classification.nonfunctional_keywords
    }

    /// The ordered category taxonomy
    pub fn categories(&self) -> &[Category] {
        &self.profile.classification.categories
    }
}

/// Substring match of any needle in already-lowercased text
pub(crate) fn contains_any(text_lower: &str, needles: &[String]) -> bool {
    needles.iter().any(|n| text_lower.contains(n.as_str()))
}

fn validate(profile: &LexiconProfile) -> std::result::Result<(), String> {
    if profile.metadata.code.is_empty() {
        return Err("metadata.code must not be empty".to_string());
    }
    if profile.vocabulary.action_verbs.is_empty() {
        return Err("vocabulary.action_verbs must not be empty".to_string());
    }
    if profile.vocabulary.modal_verbs.is_empty() {
        return Err("vocabulary.modal_verbs must not be empty".to_string());
    }
    if profile.refinement.lead_phrases.is_empty() {
        return Err("refinement.lead_phrases must not be empty".to_string());
    }
    for phrase in &profile.refinement.lead_phrases {
        if *phrase != phrase.to_lowercase() {
            return Err(format!("lead phrase '{phrase}' must be lowercase"));
        }
    }
    if profile.refinement.default_lead.trim().is_empty() {
        return Err("refinement.default_lead must not be empty".to_string());
    }
    if profile.classification.categories.is_empty() {
        return Err("classification.categories must not be empty".to_string());
    }
    for category in &profile.classification.categories {
        if category.name.is_empty() {
            return Err("category names must not be empty".to_string());
        }
        if category.keywords.is_empty() {
            return Err(format!("category '{}' has no keywords", category.name));
        }
    }
    Ok(())
}
