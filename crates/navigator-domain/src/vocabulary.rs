//! Relationship vocabulary - kinship nouns used as a secondary character source

use std::collections::HashMap;

/// Built-in relationship terms and their display labels
const DEFAULT_TERMS: &[(&str, &str)] = &[
    ("wife", "The Wife"),
    ("husband", "The Husband"),
    ("mother", "The Mother"),
    ("father", "The Father"),
    ("mom", "The Mother"),
    ("dad", "The Father"),
    ("brother", "The Brother"),
    ("sister", "The Sister"),
    ("son", "The Son"),
    ("daughter", "The Daughter"),
    ("uncle", "The Uncle"),
    ("aunt", "The Aunt"),
    ("grandmother", "The Grandmother"),
    ("grandfather", "The Grandfather"),
    ("cousin", "The Cousin"),
    ("nephew", "The Nephew"),
    ("niece", "The Niece"),
    ("fiancé", "The Fiancé"),
    ("fiancee", "The Fiancée"),
    ("boss", "The Boss"),
    ("friend", "The Friend"),
];

/// Mapping from relationship noun to canonical display label
///
/// Terms are stored lowercase; lookups lowercase the probe. Every bare
/// occurrence of a term counts, with no check for a possessive in front of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipVocabulary {
    terms: HashMap<String, String>,
}

impl RelationshipVocabulary {
    /// Vocabulary with no terms (disables the alias source)
    pub fn empty() -> Self {
        Self {
            terms: HashMap::new(),
        }
    }

    /// Build a vocabulary from `(term, label)` pairs
    ///
    /// # Examples
    ///
    /// ```
    /// use navigator_domain::RelationshipVocabulary;
    ///
    /// let vocabulary = RelationshipVocabulary::from_pairs([("Mother", "The Mother")]);
    /// assert_eq!(vocabulary.resolve("MOTHER"), Some("The Mother"));
    /// assert_eq!(vocabulary.resolve("father"), None);
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let terms = pairs
            .into_iter()
            .map(|(term, label)| (term.as_ref().to_lowercase(), label.into()))
            .collect();
        Self { terms }
    }

    /// Resolve a token to its display label
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.terms.get(&token.to_lowercase()).map(String::as_str)
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when the vocabulary has no terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms and labels sorted by term
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .terms
            .iter()
            .map(|(term, label)| (term.as_str(), label.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }
}

impl Default for RelationshipVocabulary {
    /// The built-in kinship table
    fn default() -> Self {
        Self::from_pairs(DEFAULT_TERMS.iter().copied())
    }
}

/// Built-in `(term, label)` pairs, for callers that need to seed a config
pub fn default_terms() -> impl Iterator<Item = (&'static str, &'static str)> {
    DEFAULT_TERMS.iter().copied()
}
