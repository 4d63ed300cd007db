//! Candidate module - provisional characters and their mined traits

use std::collections::{HashMap, HashSet};

/// Which collector source first produced a candidate
///
/// The source decides how the trait miner matches sentences against the
/// candidate key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateSource {
    /// Person span reported by named-entity recognition
    Entity,

    /// Relationship noun resolved through the alias vocabulary
    Alias,
}

impl CandidateSource {
    /// Get the source name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateSource::Entity => "entity",
            CandidateSource::Alias => "alias",
        }
    }
}

/// Insertion-ordered set of lowercase trait strings
///
/// Truncation happens at output time, so the first-seen order must survive
/// accumulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraitSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl TraitSet {
    /// Create an empty trait set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a trait, returning `false` if it was already present
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.ordered.push(value);
        true
    }

    /// Check whether a trait is present
    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    /// Number of traits
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// True when no trait has been recorded
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterate traits in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// The first `limit` traits in insertion order
    pub fn first(&self, limit: usize) -> Vec<String> {
        self.ordered.iter().take(limit).cloned().collect()
    }
}

/// A provisional character
///
/// Candidates are keyed by exact string identity: "Alice" and "alice" are two
/// different candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Exact surface form or alias display label
    pub key: String,

    /// Number of occurrences seen by the collector (always >= 1)
    pub mention_count: usize,

    /// Adjectives mined from sentences that mention this candidate
    pub traits: TraitSet,

    /// Source that created the candidate
    pub source: CandidateSource,
}

impl Candidate {
    /// Create a candidate for its first mention
    pub fn new(key: impl Into<String>, source: CandidateSource) -> Self {
        Self {
            key: key.into(),
            mention_count: 1,
            traits: TraitSet::new(),
            source,
        }
    }
}

/// Insertion-ordered mapping from candidate key to candidate
///
/// Iteration follows order of first mention, which keeps trait insertion and
/// ranking ties deterministic.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    candidates: Vec<Candidate>,
    index: HashMap<String, usize>,
}

impl CandidateSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one mention of `key`
    ///
    /// The first mention creates the candidate with a count of one and the
    /// given source; later mentions only increment the count. Returns the
    /// updated count.
    pub fn record_mention(&mut self, key: &str, source: CandidateSource) -> usize {
        if let Some(&position) = self.index.get(key) {
            let candidate = &mut self.candidates[position];
            candidate.mention_count += 1;
            return candidate.mention_count;
        }

        self.index.insert(key.to_string(), self.candidates.len());
        self.candidates.push(Candidate::new(key, source));
        1
    }

    /// Look up a candidate by exact key
    pub fn get(&self, key: &str) -> Option<&Candidate> {
        self.index.get(key).map(|&position| &self.candidates[position])
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// True when no candidate has been recorded
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Count candidates created by `source`
    pub fn count_from(&self, source: CandidateSource) -> usize {
        self.candidates.iter().filter(|c| c.source == source).count()
    }

    /// Iterate candidates in first-mention order
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    /// Iterate candidates mutably in first-mention order
    ///
    /// Keys are not exposed mutably through [`Candidate`] identity; callers
    /// must not rewrite `key`.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Candidate> {
        self.candidates.iter_mut()
    }

    /// Consume the set, yielding candidates in first-mention order
    pub fn into_vec(self) -> Vec<Candidate> {
        self.candidates
    }
}
