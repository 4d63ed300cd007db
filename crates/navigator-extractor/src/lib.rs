//! Character Navigator Extractor
//!
//! Turns an EPUB into a ranked list of character profiles using classical
//! NLP: entity recognition, a relationship-alias vocabulary, and
//! sentence-scoped adjective mining.
//!
//! # Architecture
//!
//! ```text
//! EPUB bytes → ArchiveTextExtractor → CandidateCollector → TraitMiner → ProfileRanker
//!                                         ↑                   ↑
//!                                         └──── NlpEngine ────┘
//! ```
//!
//! # Key Features
//!
//! - **Container validation**: `META-INF/container.xml` must name a rootfile
//! - **Two candidate sources**: person entities and relationship aliases
//! - **Pluggable matching**: substring or token membership, per source
//! - **Deterministic output**: same archive, same engine, same JSON
//!
//! # Example Usage
//!
//! ```no_run
//! use navigator_extractor::{Pipeline, PipelineConfig};
//! use navigator_nlp::RuleEngine;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = Pipeline::new(RuleEngine::new(), PipelineConfig::default())?;
//!
//! let bytes = std::fs::read("book.epub")?;
//! let report = pipeline.analyze(bytes)?;
//!
//! for character in &report.characters {
//!     println!("{}: {}", character.name, character.traits.join(", "));
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod archive;
pub mod collector;
pub mod config;
pub mod container;
pub mod error;
pub mod matching;
pub mod miner;
pub mod pipeline;
pub mod ranker;
pub mod types;

pub use archive::{ArchiveTextExtractor, ExtractedText, MemoryArchive, ZipArchiveReader};
pub use collector::CandidateCollector;
pub use config::{MatchPolicy, PipelineConfig};
pub use error::PipelineError;
pub use matching::{SentenceMatcher, SubstringMatcher, TokenMembershipMatcher};
pub use miner::{MiningSummary, TraitMiner};
pub use pipeline::Pipeline;
pub use ranker::ProfileRanker;
pub use types::{AnalysisReport, PipelineStats, Profile};
