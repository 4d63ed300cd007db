//! Sentence matching strategies
//!
//! The miner asks one question per (sentence, candidate) pair: does this
//! sentence talk about this candidate? Entity names are matched as literal
//! substrings; alias labels such as "The Mother" are matched by their terms.

use crate::config::MatchPolicy;
use navigator_domain::Token;
use std::collections::HashSet;

/// A sentence prepared for matching
#[derive(Debug, Clone)]
pub struct Sentence<'a> {
    text: &'a str,
    tokens: Vec<Token>,
    lowered: HashSet<String>,
}

impl<'a> Sentence<'a> {
    /// Prepare a sentence from its surface text and tokens
    pub fn new(text: &'a str, tokens: Vec<Token>) -> Self {
        let lowered = tokens.iter().map(|t| t.text.to_lowercase()).collect();
        Self {
            text,
            tokens,
            lowered,
        }
    }

    /// Surface text
    pub fn text(&self) -> &str {
        self.text
    }

    /// Tokens in text order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Case-insensitive token lookup
    pub fn has_token(&self, term: &str) -> bool {
        self.lowered.contains(&term.to_lowercase())
    }
}

/// Decides whether a sentence mentions a candidate
pub trait SentenceMatcher: Send + Sync {
    /// Policy implemented by this matcher
    fn policy(&self) -> MatchPolicy;

    /// Check the sentence against a candidate key
    fn matches(&self, key: &str, sentence: &Sentence<'_>) -> bool;
}

/// Exact key occurs in the sentence text
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl SentenceMatcher for SubstringMatcher {
    fn policy(&self) -> MatchPolicy {
        MatchPolicy::Substring
    }

    fn matches(&self, key: &str, sentence: &Sentence<'_>) -> bool {
        !key.is_empty() && sentence.text().contains(key)
    }
}

/// Any key term longer than two characters is a sentence token
///
/// Articles count as terms, so "The Mother" matches every sentence that
/// contains "the".
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenMembershipMatcher;

impl SentenceMatcher for TokenMembershipMatcher {
    fn policy(&self) -> MatchPolicy {
        MatchPolicy::TokenMembership
    }

    fn matches(&self, key: &str, sentence: &Sentence<'_>) -> bool {
        key.split_whitespace()
            .filter(|term| term.chars().count() > 2)
            .any(|term| sentence.has_token(term))
    }
}

/// Build the matcher for a policy
pub fn matcher_for(policy: MatchPolicy) -> Box<dyn SentenceMatcher> {
    match policy {
        MatchPolicy::Substring => Box::new(SubstringMatcher),
        MatchPolicy::TokenMembership => Box::new(TokenMembershipMatcher),
    }
}
