//! Candidate collection from entity and alias sources

use crate::error::PipelineError;
use navigator_domain::traits::NlpEngine;
use navigator_domain::{CandidateSet, CandidateSource, RelationshipVocabulary, TextCorpus};
use std::fmt::Display;
use tracing::debug;

/// Keys of this many characters or fewer are discarded
const MIN_KEY_CHARS: usize = 2;

/// Builds the candidate set for a corpus
///
/// Entities are scanned before aliases, so an entity key that also resolves
/// as an alias label keeps the entity source.
pub struct CandidateCollector<'v> {
    vocabulary: &'v RelationshipVocabulary,
    reject_multiline: bool,
}

impl<'v> CandidateCollector<'v> {
    /// Create a collector
    pub fn new(vocabulary: &'v RelationshipVocabulary, reject_multiline: bool) -> Self {
        Self {
            vocabulary,
            reject_multiline,
        }
    }

    /// Count candidate mentions across the corpus
    pub fn collect<E>(&self, corpus: &TextCorpus, engine: &E) -> Result<CandidateSet, PipelineError>
    where
        E: NlpEngine,
        E::Error: Display,
    {
        let mut candidates = CandidateSet::new();
        let text = corpus.as_str();

        let entities = engine
            .recognize_entities(text)
            .map_err(PipelineError::engine)?;
        for entity in entities.iter().filter(|e| e.is_person()) {
            let key = entity.span.slice(text).trim();
            if self.accepts_entity(key) {
                candidates.record_mention(key, CandidateSource::Entity);
            }
        }
        debug!(
            "Entity scan: {} person mentions, {} distinct candidates",
            entities.iter().filter(|e| e.is_person()).count(),
            candidates.len()
        );

        if !self.vocabulary.is_empty() {
            let tokens = engine.tokenize(text).map_err(PipelineError::engine)?;
            for token in &tokens {
                if let Some(label) = self.vocabulary.resolve(&token.text) {
                    candidates.record_mention(label, CandidateSource::Alias);
                }
            }
        }

        Ok(candidates)
    }

    fn accepts_entity(&self, key: &str) -> bool {
        if key.chars().count() <= MIN_KEY_CHARS {
            return false;
        }
        !(self.reject_multiline && key.contains(['\n', '\r']))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navigator_nlp::MockEngine;

    fn corpus(text: &str) -> TextCorpus {
        TextCorpus::new(text.to_string(), 1)
    }

    #[test]
    fn test_entities_counted_by_exact_key() {
        let engine = MockEngine::new().with_people(["Elizabeth", "Darcy"]);
        let vocabulary = RelationshipVocabulary::empty();
        let collector = CandidateCollector::new(&vocabulary, false);

        let set = collector
            .collect(&corpus("Elizabeth met Darcy. Elizabeth frowned."), &engine)
            .unwrap();

        assert_eq!(set.get("Elizabeth").unwrap().mention_count, 2);
        assert_eq!(set.get("Darcy").unwrap().mention_count, 1);
        let order: Vec<&str> = set.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(order, vec!["Elizabeth", "Darcy"]);
    }

    #[test]
    fn test_short_keys_discarded() {
        let engine = MockEngine::new().with_people(["Al", "Bob"]);
        let vocabulary = RelationshipVocabulary::empty();
        let set = CandidateCollector::new(&vocabulary, false)
            .collect(&corpus("Al and Bob."), &engine)
            .unwrap();

        assert!(set.get("Al").is_none());
        assert!(set.get("Bob").is_some());
    }

    #[test]
    fn test_multiline_rejection_is_optional() {
        let engine = MockEngine::new().with_people(["Anne\nShirley"]);
        let vocabulary = RelationshipVocabulary::empty();
        let text = corpus("Then Anne\nShirley arrived.");

        let kept = CandidateCollector::new(&vocabulary, false)
            .collect(&text, &engine)
            .unwrap();
        assert_eq!(kept.len(), 1);

        let rejected = CandidateCollector::new(&vocabulary, true)
            .collect(&text, &engine)
            .unwrap();
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_alias_terms_resolve_to_labels() {
        let engine = MockEngine::new();
        let vocabulary = RelationshipVocabulary::default();
        let set = CandidateCollector::new(&vocabulary, false)
            .collect(&corpus("Her Mother smiled. My mother laughed. Dad slept."), &engine)
            .unwrap();

        let mother = set.get("The Mother").unwrap();
        assert_eq!(mother.mention_count, 2);
        assert_eq!(mother.source, CandidateSource::Alias);
        assert_eq!(set.get("The Father").unwrap().mention_count, 1);
    }

    #[test]
    fn test_first_source_wins() {
        let engine = MockEngine::new().with_people(["The Mother"]);
        let vocabulary = RelationshipVocabulary::default();
        let set = CandidateCollector::new(&vocabulary, false)
            .collect(&corpus("The Mother spoke. Her mother was tired."), &engine)
            .unwrap();

        let mother = set.get("The Mother").unwrap();
        assert_eq!(mother.source, CandidateSource::Entity);
        assert_eq!(mother.mention_count, 3);
    }

    #[test]
    fn test_engine_failure_propagates() {
        let engine = MockEngine::new().failing("model missing");
        let vocabulary = RelationshipVocabulary::default();
        let result = CandidateCollector::new(&vocabulary, false)
            .collect(&corpus("Anything at all."), &engine);

        assert!(matches!(result, Err(PipelineError::EngineFailure(_))));
    }
}
