//! Corpus module - the concatenated narrative text of one book

use std::fmt;

/// Immutable narrative text extracted from an archive
///
/// Length is measured in characters, not bytes, so multi-byte text is not
/// penalized against the viability threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCorpus {
    text: String,
    chapter_count: usize,
}

impl TextCorpus {
    /// Wrap extracted text together with the number of chapters it came from
    pub fn new(text: String, chapter_count: usize) -> Self {
        Self {
            text,
            chapter_count,
        }
    }

    /// The corpus text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of chapter entries that contributed text
    pub fn chapter_count(&self) -> usize {
        self.chapter_count
    }

    /// True when the corpus reaches the minimum viable length
    pub fn is_viable(&self, minimum: usize) -> bool {
        self.char_len() >= minimum
    }
}

impl AsRef<str> for TextCorpus {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for TextCorpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
