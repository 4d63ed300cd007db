//! Configuration for the extraction pipeline

use navigator_domain::vocabulary::default_terms;
use navigator_domain::RelationshipVocabulary;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// How a sentence is tested against a candidate key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// The exact key occurs somewhere in the sentence text
    Substring,
    /// Any key term longer than two characters is one of the sentence's
    /// tokens (case-insensitive)
    TokenMembership,
}

/// Default archive size cap (100 MiB)
pub const DEFAULT_MAX_ARCHIVE_BYTES: usize = 100 * 1024 * 1024;

/// Default cap on decompressed entry bytes (256 MiB)
pub const DEFAULT_MAX_CORPUS_BYTES: usize = 256 * 1024 * 1024;

/// Default minimum corpus length, in characters
pub const DEFAULT_MINIMUM_CORPUS_LENGTH: usize = 100;

/// Configuration for the extraction pipeline
///
/// Missing TOML fields fall back to [`PipelineConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Use only the first N chapter entries (0 = all)
    pub chapter_limit: usize,

    /// Candidates need strictly more mentions than this to be returned
    pub mention_threshold: usize,

    /// Traits kept per profile, in first-seen order
    pub max_traits_per_character: usize,

    /// Profiles returned (0 = no cap)
    pub max_characters_returned: usize,

    /// Adjectives never recorded as traits
    pub noise_words: BTreeSet<String>,

    /// Corpora shorter than this many characters are rejected
    pub minimum_corpus_length: usize,

    /// Drop entity spans that contain a line break
    pub reject_multiline_entities: bool,

    /// Sentence matching for entity-derived candidates
    pub entity_match: MatchPolicy,

    /// Sentence matching for alias-derived candidates
    pub alias_match: MatchPolicy,

    /// Largest archive accepted, in bytes (0 = unbounded)
    pub max_archive_bytes: usize,

    /// Total bytes decompressed out of an archive (0 = unbounded)
    pub max_corpus_bytes: usize,

    /// Relationship term to display label
    pub relationship_vocabulary: BTreeMap<String, String>,
}

impl PipelineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_traits_per_character == 0 {
            return Err("max_traits_per_character must be greater than 0".to_string());
        }
        if let Some(term) = self
            .relationship_vocabulary
            .iter()
            .find(|(term, label)| term.trim().is_empty() || label.trim().is_empty())
            .map(|(term, _)| term)
        {
            return Err(format!(
                "relationship_vocabulary entry '{}' needs a non-empty term and label",
                term
            ));
        }
        if self.noise_words.iter().any(|w| w.trim().is_empty()) {
            return Err("noise_words must not contain empty entries".to_string());
        }
        Ok(())
    }

    /// Build the vocabulary used by the collector
    pub fn vocabulary(&self) -> RelationshipVocabulary {
        RelationshipVocabulary::from_pairs(
            self.relationship_vocabulary
                .iter()
                .map(|(term, label)| (term.as_str(), label.clone())),
        )
    }

    /// Noise words, lowercased
    pub fn noise_set(&self) -> BTreeSet<String> {
        self.noise_words.iter().map(|w| w.to_lowercase()).collect()
    }
}

impl Default for PipelineConfig {
    /// Least restrictive settings: every chapter, more than one mention,
    /// five traits, no list cap, no noise words
    fn default() -> Self {
        Self {
            chapter_limit: 0,
            mention_threshold: 1,
            max_traits_per_character: 5,
            max_characters_returned: 0,
            noise_words: BTreeSet::new(),
            minimum_corpus_length: DEFAULT_MINIMUM_CORPUS_LENGTH,
            reject_multiline_entities: false,
            entity_match: MatchPolicy::Substring,
            alias_match: MatchPolicy::TokenMembership,
            max_archive_bytes: DEFAULT_MAX_ARCHIVE_BYTES,
            max_corpus_bytes: DEFAULT_MAX_CORPUS_BYTES,
            relationship_vocabulary: default_vocabulary(),
        }
    }
}

impl PipelineConfig {
    /// Strict preset: bounded work and a cleaner, shorter result list
    pub fn strict() -> Self {
        Self {
            chapter_limit: 40,
            mention_threshold: 2,
            max_traits_per_character: 6,
            max_characters_returned: 20,
            noise_words: [
                "other", "many", "more", "same", "such", "little", "own", "new", "old",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            reject_multiline_entities: true,
            ..Self::default()
        }
    }

    /// Lenient preset: more traits per character
    pub fn lenient() -> Self {
        Self {
            max_traits_per_character: 8,
            ..Self::default()
        }
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default()),
            "strict" => Some(Self::strict()),
            "lenient" => Some(Self::lenient()),
            _ => None,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

fn default_vocabulary() -> BTreeMap<String, String> {
    default_terms()
        .map(|(term, label)| (term.to_string(), label.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mention_threshold, 1);
        assert_eq!(config.max_traits_per_character, 5);
        assert!(config.noise_words.is_empty());
    }

    #[test]
    fn test_presets_are_valid() {
        for name in ["default", "strict", "lenient"] {
            let config = PipelineConfig::preset(name).unwrap();
            assert!(config.validate().is_ok(), "preset {} should be valid", name);
        }
        assert!(PipelineConfig::preset("reckless").is_none());
    }

    #[test]
    fn test_strict_preset() {
        let config = PipelineConfig::strict();
        assert_eq!(config.mention_threshold, 2);
        assert_eq!(config.max_characters_returned, 20);
        assert!(config.noise_words.contains("little"));
        assert!(config.reject_multiline_entities);
    }

    #[test]
    fn test_zero_traits_rejected() {
        let mut config = PipelineConfig::default();
        config.max_traits_per_character = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_vocabulary_label_rejected() {
        let mut config = PipelineConfig::default();
        config
            .relationship_vocabulary
            .insert("mother".to_string(), " ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = PipelineConfig::from_toml(
            r#"
            mention_threshold = 2
            noise_words = ["Other"]
            entity_match = "token_membership"

            [relationship_vocabulary]
            mother = "The Mother"
            "#,
        )
        .unwrap();

        assert_eq!(config.mention_threshold, 2);
        assert_eq!(config.max_traits_per_character, 5);
        assert_eq!(config.entity_match, MatchPolicy::TokenMembership);
        assert_eq!(config.relationship_vocabulary.len(), 1);
        assert!(config.noise_set().contains("other"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PipelineConfig::strict();
        let toml_str = config.to_toml().unwrap();
        let parsed = PipelineConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_vocabulary_from_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.vocabulary().resolve("Wife"), Some("The Wife"));
    }
}
