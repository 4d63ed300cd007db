//! Final filtering and ordering of profiles

use crate::config::PipelineConfig;
use crate::types::Profile;
use navigator_domain::CandidateSet;

/// Turns mined candidates into the ranked profile list
#[derive(Debug, Clone, Copy)]
pub struct ProfileRanker {
    mention_threshold: usize,
    max_traits: usize,
    max_characters: usize,
}

impl ProfileRanker {
    /// Create a ranker
    pub fn new(mention_threshold: usize, max_traits: usize, max_characters: usize) -> Self {
        Self {
            mention_threshold,
            max_traits,
            max_characters,
        }
    }

    /// Create a ranker from pipeline settings
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(
            config.mention_threshold,
            config.max_traits_per_character,
            config.max_characters_returned,
        )
    }

    /// Filter, project, order and cap
    ///
    /// Candidates need more than `mention_threshold` mentions and at least one
    /// trait. The sort is stable, so profiles with equal trait counts keep
    /// first-mention order.
    pub fn rank(&self, candidates: CandidateSet) -> Vec<Profile> {
        let mut profiles: Vec<Profile> = candidates
            .into_vec()
            .into_iter()
            .filter(|c| c.mention_count > self.mention_threshold && !c.traits.is_empty())
            .map(|c| Profile {
                traits: c.traits.first(self.max_traits),
                name: c.key,
            })
            .collect();

        profiles.sort_by(|a, b| b.traits.len().cmp(&a.traits.len()));

        if self.max_characters > 0 {
            profiles.truncate(self.max_characters);
        }
        profiles
    }
}
