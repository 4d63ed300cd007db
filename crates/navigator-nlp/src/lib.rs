//! Character Navigator NLP Engine Layer
//!
//! Pluggable implementations of the `NlpEngine` trait from `navigator-domain`.
//!
//! # Engines
//!
//! - `RuleEngine`: Classical lexicon and heuristic tagger used in production
//! - `MockEngine`: Deterministic gazetteer engine for testing
//!
//! Both engines share the same sentence segmenter and tokenizer, and both
//! report results in text order.
//!
//! # Examples
//!
//! ```
//! use navigator_nlp::MockEngine;
//! use navigator_domain::traits::NlpEngine;
//!
//! let engine = MockEngine::new().with_people(["Alice"]);
//! let entities = engine.recognize_entities("Alice met Alice.").unwrap();
//! assert_eq!(entities.len(), 2);
//! ```

#![warn(missing_docs)]

mod lexicon;
pub mod rules;
pub mod text;

use navigator_domain::traits::NlpEngine;
use navigator_domain::{Entity, EntityKind, PosTag, Span, Token};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;

pub use rules::RuleEngine;

/// Errors that can occur during NLP operations
#[derive(Error, Debug)]
pub enum NlpError {
    /// Text exceeds what the engine accepts
    #[error("Input too large: {0} bytes (max: {1})")]
    InputTooLarge(usize, usize),

    /// Unrecoverable engine condition
    #[error("Engine failure: {0}")]
    Failed(String),
}

/// Mock NLP engine for deterministic testing
///
/// Person entities come from a fixed gazetteer matched on word boundaries;
/// adjectives come from a fixed word list. Everything else is tagged
/// [`PosTag::Other`]. Sentence splitting and tokenization are the real ones.
///
/// # Examples
///
/// ```
/// use navigator_nlp::MockEngine;
/// use navigator_domain::traits::NlpEngine;
/// use navigator_domain::PosTag;
///
/// let engine = MockEngine::new().with_adjectives(["kind"]);
/// let tokens = engine.tokenize("so kind").unwrap();
/// assert_eq!(engine.pos_tag(&tokens[1]), PosTag::Adjective);
/// assert_eq!(engine.call_count(), 1);
///
/// let failing = MockEngine::new().failing("model unavailable");
/// assert!(failing.tokenize("text").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockEngine {
    people: Vec<String>,
    adjectives: HashSet<String>,
    failure: Option<String>,
    call_count: Arc<AtomicUsize>,
}

impl MockEngine {
    /// Create an engine that knows no people and no adjectives
    pub fn new() -> Self {
        Self::default()
    }

    /// Add names to the person gazetteer
    pub fn with_people<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.people.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add words that tag as adjectives (case-insensitive)
    pub fn with_adjectives<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.adjectives
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Make every fallible call return an engine failure
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Number of fallible engine calls made so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }

    fn begin_call(&self) -> Result<(), NlpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(NlpError::Failed(message.clone())),
            None => Ok(()),
        }
    }
}

impl NlpEngine for MockEngine {
    type Error = NlpError;

    fn name(&self) -> &str {
        "mock"
    }

    fn segment_sentences(&self, text: &str) -> Result<Vec<Span>, Self::Error> {
        self.begin_call()?;
        Ok(text::segment_sentences(text))
    }

    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        self.begin_call()?;
        Ok(text::tokenize(text))
    }

    fn pos_tag(&self, token: &Token) -> PosTag {
        if token.is_punctuation() {
            PosTag::Punctuation
        } else if self.adjectives.contains(&token.text.to_lowercase()) {
            PosTag::Adjective
        } else {
            PosTag::Other
        }
    }

    fn recognize_entities(&self, text: &str) -> Result<Vec<Entity>, Self::Error> {
        self.begin_call()?;

        let mut found: Vec<Span> = Vec::new();
        for name in self.people.iter().filter(|n| !n.is_empty()) {
            for (start, matched) in text.match_indices(name.as_str()) {
                let end = start + matched.len();
                if on_word_boundary(text, start, end) {
                    found.push(Span::new(start, end));
                }
            }
        }

        // Text order, longest match first at a shared start, no overlaps.
        found.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
        let mut entities: Vec<Entity> = Vec::new();
        for span in found {
            if entities.last().is_some_and(|last| span.start < last.span.end) {
                continue;
            }
            entities.push(Entity::new(span, EntityKind::Person));
        }
        Ok(entities)
    }
}

fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}
