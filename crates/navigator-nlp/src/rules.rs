//! Rule Engine Implementation
//!
//! A classical English tagger built from closed-class word lists, a lexicon of
//! descriptive adjectives, suffix rules, and capitalization heuristics for
//! person names. It needs no model files and is deterministic.
//!
//! # Examples
//!
//! ```
//! use navigator_nlp::RuleEngine;
//! use navigator_domain::traits::NlpEngine;
//! use navigator_domain::PosTag;
//!
//! let engine = RuleEngine::new();
//! let text = "Mr. Darcy was proud.";
//!
//! let entities = engine.recognize_entities(text).unwrap();
//! assert_eq!(entities[0].span.slice(text), "Mr. Darcy");
//!
//! let tokens = engine.tokenize(text).unwrap();
//! assert_eq!(engine.pos_tag(&tokens[4]), PosTag::Adjective);
//! ```

use crate::lexicon;
use crate::text;
use crate::NlpError;
use navigator_domain::traits::NlpEngine;
use navigator_domain::{Entity, EntityKind, PosTag, Span, Token};
use std::collections::{HashMap, HashSet};

/// Default cap on the size of a single text handed to the engine (64 MiB)
pub const DEFAULT_MAX_TEXT_BYTES: usize = 64 * 1024 * 1024;

/// Lexicon and heuristic based NLP engine
#[derive(Debug, Clone)]
pub struct RuleEngine {
    closed_class: HashMap<&'static str, PosTag>,
    adjectives: HashSet<String>,
    non_names: HashSet<&'static str>,
    calendar: HashSet<&'static str>,
    honorifics: HashSet<&'static str>,
    places: HashSet<&'static str>,
    organizations: HashSet<&'static str>,
    max_text_bytes: usize,
}

impl RuleEngine {
    /// Create an engine with the built-in English lexicon
    pub fn new() -> Self {
        let mut closed_class = HashMap::new();
        for (words, tag) in [
            (lexicon::DETERMINERS, PosTag::Determiner),
            (lexicon::PRONOUNS, PosTag::Pronoun),
            (lexicon::FUNCTION_WORDS, PosTag::Function),
            (lexicon::VERBS, PosTag::Verb),
            (lexicon::ADVERBS, PosTag::Adverb),
        ] {
            for word in words {
                closed_class.entry(*word).or_insert(tag);
            }
        }

        Self {
            closed_class,
            adjectives: lexicon::ADJECTIVES.iter().map(|w| w.to_string()).collect(),
            non_names: lexicon::NON_NAME_WORDS.iter().copied().collect(),
            calendar: lexicon::CALENDAR_WORDS.iter().copied().collect(),
            honorifics: lexicon::HONORIFICS.iter().copied().collect(),
            places: lexicon::PLACE_SUFFIXES.iter().copied().collect(),
            organizations: lexicon::ORGANIZATION_SUFFIXES.iter().copied().collect(),
            max_text_bytes: DEFAULT_MAX_TEXT_BYTES,
        }
    }

    /// Add words to the adjective lexicon
    pub fn with_adjectives<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.adjectives
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Set the largest text the engine accepts
    pub fn with_max_text_bytes(mut self, max_text_bytes: usize) -> Self {
        self.max_text_bytes = max_text_bytes;
        self
    }

    fn check_size(&self, text: &str) -> Result<(), NlpError> {
        if text.len() > self.max_text_bytes {
            return Err(NlpError::InputTooLarge(text.len(), self.max_text_bytes));
        }
        Ok(())
    }

    /// Tag a single word without sentence context
    fn tag_word(&self, word: &str) -> PosTag {
        if !word.chars().any(char::is_alphanumeric) {
            return PosTag::Punctuation;
        }
        if word.chars().all(|c| c.is_numeric() || c == ',' || c == '.') {
            return PosTag::Numeral;
        }

        let lower = word.to_lowercase();
        if let Some(tag) = self.closed_class.get(lower.as_str()) {
            return *tag;
        }
        if self.adjectives.contains(&lower) {
            return PosTag::Adjective;
        }
        if word.chars().next().is_some_and(char::is_uppercase) {
            return PosTag::ProperNoun;
        }

        let length = lower.chars().count();
        if lexicon::NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return PosTag::Noun;
        }
        if length > 4 && lower.ends_with("ly") {
            return PosTag::Adverb;
        }
        if length > 4 && (lower.ends_with("ing") || lower.ends_with("ed")) {
            return PosTag::Verb;
        }
        if lexicon::ADJECTIVE_SUFFIXES
            .iter()
            .any(|s| lower.ends_with(s) && length > s.len() + 2)
        {
            return PosTag::Adjective;
        }
        PosTag::Noun
    }

    /// True when a capitalized word is really an ordinary word in disguise
    fn is_ordinary_word(&self, word: &str) -> bool {
        !matches!(self.tag_word(&word.to_lowercase()), PosTag::Noun)
    }

    fn is_name_word(word: &str) -> bool {
        let mut chars = word.chars();
        let starts_upper = chars.next().is_some_and(char::is_uppercase);
        let shouting = word.chars().count() > 1 && word.chars().all(|c| !c.is_lowercase());
        starts_upper && !shouting
    }

    fn classify(&self, words: &[&Token]) -> Option<EntityKind> {
        let names: Vec<&str> = words
            .iter()
            .map(|t| t.text.as_str())
            .filter(|w| *w != ".")
            .collect();

        if names.iter().any(|w| self.calendar.contains(w)) {
            return None;
        }
        if names.iter().all(|w| self.honorifics.contains(w)) {
            return None;
        }

        let last = names.last()?;
        if self.places.contains(last) {
            Some(EntityKind::Place)
        } else if self.organizations.contains(last) {
            Some(EntityKind::Organization)
        } else {
            Some(EntityKind::Person)
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl NlpEngine for RuleEngine {
    type Error = NlpError;

    fn name(&self) -> &str {
        "rule-engine"
    }

    fn segment_sentences(&self, text: &str) -> Result<Vec<Span>, Self::Error> {
        self.check_size(text)?;
        Ok(text::segment_sentences(text))
    }

    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        self.check_size(text)?;
        Ok(text::tokenize(text))
    }

    fn pos_tag(&self, token: &Token) -> PosTag {
        self.tag_word(&token.text)
    }

    fn recognize_entities(&self, text: &str) -> Result<Vec<Entity>, Self::Error> {
        self.check_size(text)?;
        let tokens = text::tokenize(text);
        let mut entities = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if !Self::is_name_word(&tokens[i].text) {
                i += 1;
                continue;
            }

            // Grow a run of capitalized words joined by single-line gaps,
            // letting "Mr." style titles carry their period.
            let mut run = vec![&tokens[i]];
            let mut j = i + 1;
            while j < tokens.len() {
                let previous = run[run.len() - 1];
                let next = &tokens[j];

                if next.text == "."
                    && previous.span.end == next.span.start
                    && self.honorifics.contains(previous.text.as_str())
                    && tokens
                        .get(j + 1)
                        .is_some_and(|after| Self::is_name_word(&after.text))
                {
                    run.push(next);
                    j += 1;
                    continue;
                }

                let gap = &text[previous.span.end..next.span.start];
                let joined = !gap.is_empty() && gap.chars().all(|c| c == ' ' || c == '\t');
                if joined && Self::is_name_word(&next.text) {
                    run.push(next);
                    j += 1;
                } else {
                    break;
                }
            }

            // Trim leading words that cannot start a name.
            let initial = starts_sentence(text, run[0].span.start);
            let mut first = 0;
            while first < run.len() {
                let word = run[first].text.as_str();
                let ordinary = first == 0 && initial && self.is_ordinary_word(word);
                if self.non_names.contains(word) || ordinary {
                    first += 1;
                } else {
                    break;
                }
            }

            let words = &run[first..];
            if let Some(kind) = self.classify(words) {
                let span = Span::new(words[0].span.start, words[words.len() - 1].span.end);
                entities.push(Entity::new(span, kind));
            }
            i = j;
        }

        Ok(entities)
    }
}

/// True when the token starting at `offset` opens a sentence or paragraph
fn starts_sentence(text: &str, offset: usize) -> bool {
    let before = &text[..offset];
    let trimmed = before.trim_end();
    let gap = &before[trimmed.len()..];
    if gap.matches('\n').count() >= 2 {
        return true;
    }
    match trimmed.chars().last() {
        None => true,
        Some(c) => matches!(c, '.' | '!' | '?' | '"' | '“' | '”' | ':' | '\''),
    }
}
