//! Request and response types for analysis

use serde::{Deserialize, Serialize};

/// A finished character profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Candidate key: a surface name or an alias label
    pub name: String,

    /// Traits in first-seen order
    pub traits: Vec<String>,
}

/// Result of one pipeline run
///
/// Serializes to `{ "characters": [...] }`; statistics stay out of the wire
/// format so repeated runs produce identical output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Ranked profiles
    pub characters: Vec<Profile>,

    /// Bookkeeping about the run
    #[serde(skip)]
    pub stats: PipelineStats,
}

/// Metadata about a pipeline run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineStats {
    /// Manifest path declared by the container descriptor (informational)
    pub manifest_path: Option<String>,

    /// Chapter entries that contributed text
    pub chapter_count: usize,

    /// Corpus length in characters
    pub corpus_length: usize,

    /// Sentences scanned by the trait miner
    pub sentence_count: usize,

    /// Candidates created from person entities
    pub entity_candidates: usize,

    /// Candidates created from relationship terms
    pub alias_candidates: usize,

    /// Trait insertions across all candidates
    pub traits_mined: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
