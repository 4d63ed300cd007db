//! Sentence-scoped adjective mining

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::matching::{matcher_for, Sentence, SentenceMatcher};
use navigator_domain::traits::NlpEngine;
use navigator_domain::{CandidateSet, CandidateSource, PosTag, TextCorpus, Token};
use std::collections::BTreeSet;
use std::fmt::Display;
use tracing::debug;

/// Adjectives of this many characters or fewer are not traits
const MIN_TRAIT_CHARS: usize = 3;

/// Totals from one mining pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MiningSummary {
    /// Sentences returned by the segmenter
    pub sentences: usize,

    /// New trait insertions across all candidates
    pub traits_added: usize,
}

/// Attributes adjectives to the candidates a sentence mentions
pub struct TraitMiner {
    noise_words: BTreeSet<String>,
    entity_matcher: Box<dyn SentenceMatcher>,
    alias_matcher: Box<dyn SentenceMatcher>,
}

impl TraitMiner {
    /// Create a miner from pipeline settings
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            noise_words: config.noise_set(),
            entity_matcher: matcher_for(config.entity_match),
            alias_matcher: matcher_for(config.alias_match),
        }
    }

    /// Fill candidate trait sets in place
    ///
    /// No candidate is created or removed, and mention counts are untouched.
    pub fn mine<E>(
        &self,
        corpus: &TextCorpus,
        engine: &E,
        candidates: &mut CandidateSet,
    ) -> Result<MiningSummary, PipelineError>
    where
        E: NlpEngine,
        E::Error: Display,
    {
        let text = corpus.as_str();
        let spans = engine
            .segment_sentences(text)
            .map_err(PipelineError::engine)?;

        let mut summary = MiningSummary {
            sentences: spans.len(),
            traits_added: 0,
        };
        if candidates.is_empty() {
            return Ok(summary);
        }

        for span in &spans {
            let sentence_text = span.slice(text);
            let tokens = engine
                .tokenize(sentence_text)
                .map_err(PipelineError::engine)?;

            let adjectives = self.adjectives(engine, &tokens);
            if adjectives.is_empty() {
                continue;
            }

            let sentence = Sentence::new(sentence_text, tokens);
            for candidate in candidates.iter_mut() {
                if !self.matcher(candidate.source).matches(&candidate.key, &sentence) {
                    continue;
                }
                for adjective in &adjectives {
                    if candidate.traits.insert(adjective.as_str()) {
                        summary.traits_added += 1;
                    }
                }
            }
        }

        debug!(
            "Mined {} traits from {} sentences",
            summary.traits_added, summary.sentences
        );
        Ok(summary)
    }

    fn matcher(&self, source: CandidateSource) -> &dyn SentenceMatcher {
        match source {
            CandidateSource::Entity => self.entity_matcher.as_ref(),
            CandidateSource::Alias => self.alias_matcher.as_ref(),
        }
    }

    fn adjectives<E: NlpEngine>(&self, engine: &E, tokens: &[Token]) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| engine.pos_tag(token) == PosTag::Adjective)
            .map(|token| token.text.to_lowercase())
            .filter(|word| word.chars().count() > MIN_TRAIT_CHARS)
            .filter(|word| !self.noise_words.contains(word))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchPolicy;
    use navigator_nlp::MockEngine;

    fn corpus(text: &str) -> TextCorpus {
        TextCorpus::new(text.to_string(), 1)
    }

    fn traits_of(set: &CandidateSet, key: &str) -> Vec<String> {
        set.get(key)
            .map(|c| c.traits.iter().map(String::from).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_alias_traits_from_token_match() {
        let engine = MockEngine::new().with_adjectives(["kind", "patient"]);
        let mut set = CandidateSet::new();
        set.record_mention("The Mother", CandidateSource::Alias);

        let text = corpus("She called her mother every day. Her mother was kind and patient.");
        let summary = TraitMiner::from_config(&PipelineConfig::default())
            .mine(&text, &engine, &mut set)
            .unwrap();

        assert_eq!(summary.sentences, 2);
        assert_eq!(traits_of(&set, "The Mother"), vec!["kind", "patient"]);
    }

    #[test]
    fn test_entity_traits_need_exact_substring() {
        let engine = MockEngine::new().with_adjectives(["proud", "clever"]);
        let mut set = CandidateSet::new();
        set.record_mention("Darcy", CandidateSource::Entity);

        let text = corpus("Darcy was proud. Mr. darcy seemed clever.");
        TraitMiner::from_config(&PipelineConfig::default())
            .mine(&text, &engine, &mut set)
            .unwrap();

        assert_eq!(traits_of(&set, "Darcy"), vec!["proud"]);
    }

    #[test]
    fn test_short_and_noise_adjectives_skipped() {
        let engine = MockEngine::new().with_adjectives(["sad", "little", "gentle"]);
        let mut set = CandidateSet::new();
        set.record_mention("Jane", CandidateSource::Entity);

        let mut config = PipelineConfig::default();
        config.noise_words.insert("Little".to_string());

        TraitMiner::from_config(&config)
            .mine(&corpus("Jane was sad, little and gentle."), &engine, &mut set)
            .unwrap();

        assert_eq!(traits_of(&set, "Jane"), vec!["gentle"]);
    }

    #[test]
    fn test_traits_deduplicated_in_first_seen_order() {
        let engine = MockEngine::new().with_adjectives(["quiet", "brave"]);
        let mut set = CandidateSet::new();
        set.record_mention("Frodo", CandidateSource::Entity);

        let text = corpus("Frodo was quiet. Frodo was brave. Frodo was quiet again.");
        let summary = TraitMiner::from_config(&PipelineConfig::default())
            .mine(&text, &engine, &mut set)
            .unwrap();

        assert_eq!(traits_of(&set, "Frodo"), vec!["quiet", "brave"]);
        assert_eq!(summary.traits_added, 2);
    }

    #[test]
    fn test_policy_override_for_aliases() {
        let engine = MockEngine::new().with_adjectives(["stern"]);
        let mut set = CandidateSet::new();
        set.record_mention("The Father", CandidateSource::Alias);

        let mut config = PipelineConfig::default();
        config.alias_match = MatchPolicy::Substring;

        TraitMiner::from_config(&config)
            .mine(&corpus("The man was stern."), &engine, &mut set)
            .unwrap();

        assert!(set.get("The Father").unwrap().traits.is_empty());
    }

    #[test]
    fn test_counts_untouched() {
        let engine = MockEngine::new().with_adjectives(["tall"]);
        let mut set = CandidateSet::new();
        set.record_mention("Ahab", CandidateSource::Entity);
        set.record_mention("Ahab", CandidateSource::Entity);

        TraitMiner::from_config(&PipelineConfig::default())
            .mine(&corpus("Ahab was tall."), &engine, &mut set)
            .unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("Ahab").unwrap().mention_count, 2);
    }
}
