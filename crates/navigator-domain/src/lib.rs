//! Character Navigator Domain Layer
//!
//! This crate contains the domain model shared by every other crate in the
//! workspace. It has ZERO external dependencies and defines the value types and
//! trait seams that the extraction pipeline is written against.
//!
//! ## Key Concepts
//!
//! - **Corpus**: The narrative text of one book, concatenated from its chapters
//! - **Candidate**: A provisional character keyed by its exact surface form
//! - **Trait set**: Insertion-ordered lowercase adjectives mined for a candidate
//! - **Relationship vocabulary**: Kinship nouns mapped to display labels
//!   ("mother" → "The Mother")
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and bookkeeping only
//! - NLP engines and archive readers are traits implemented elsewhere

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod candidate;
pub mod corpus;
pub mod nlp;
pub mod traits;
pub mod vocabulary;

// Re-exports for convenience
pub use candidate::{Candidate, CandidateSet, CandidateSource, TraitSet};
pub use corpus::TextCorpus;
pub use nlp::{Entity, EntityKind, PosTag, Span, Token};
pub use vocabulary::RelationshipVocabulary;
