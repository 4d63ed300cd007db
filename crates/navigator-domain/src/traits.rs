//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline and its
//! collaborators. Implementations live in other crates.

use crate::nlp::{Entity, PosTag, Span, Token};

/// Classical NLP capabilities consumed by the pipeline
///
/// Implemented by the infrastructure layer (navigator-nlp)
///
/// Every method must return its results in text order and must be
/// deterministic for a given input, so that candidate counts and trait
/// insertion order are reproducible. Implementations are shared read-only
/// across concurrent pipeline runs.
pub trait NlpEngine {
    /// Error type for engine operations
    type Error;

    /// Short engine name for logs and health reports
    fn name(&self) -> &str;

    /// Split `text` into sentence spans
    fn segment_sentences(&self, text: &str) -> Result<Vec<Span>, Self::Error>;

    /// Split `text` into tokens
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error>;

    /// Assign a part-of-speech class to a token
    fn pos_tag(&self, token: &Token) -> PosTag;

    /// Find named-entity mentions in `text`
    fn recognize_entities(&self, text: &str) -> Result<Vec<Entity>, Self::Error>;
}

/// Read access to a structured archive
///
/// Implemented by the application layer (navigator-extractor)
pub trait ArchiveReader {
    /// Error type for archive operations
    type Error;

    /// Entry names in archive enumeration order
    fn list_entries(&self) -> Vec<String>;

    /// Raw bytes of one entry
    fn read_entry(&mut self, name: &str) -> Result<Vec<u8>, Self::Error>;

    /// Check whether an entry exists
    fn contains(&self, name: &str) -> bool {
        self.list_entries().iter().any(|entry| entry == name)
    }
}
