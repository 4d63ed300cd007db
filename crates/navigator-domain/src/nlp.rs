//! NLP value types exchanged with an engine
//!
//! Spans are byte offsets into the text handed to the engine. Engines must
//! report spans, tokens, and entities in text order.

/// Half-open byte range `[start, end)` into a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Inclusive start offset
    pub start: usize,

    /// Exclusive end offset
    pub end: usize,
}

impl Span {
    /// Create a span
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Slice the span out of `text`
    ///
    /// Returns an empty string if the span does not fall on character
    /// boundaries of `text`.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.start..self.end).unwrap_or("")
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a zero-length span
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A token produced by an engine's tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface text
    pub text: String,

    /// Location in the tokenized text
    pub span: Span,
}

impl Token {
    /// Create a token
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    /// True when the token is made only of punctuation or symbols
    pub fn is_punctuation(&self) -> bool {
        !self.text.chars().any(char::is_alphanumeric)
    }
}

/// Coarse part-of-speech classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// Adjective
    Adjective,
    /// Adverb
    Adverb,
    /// Determiner or article
    Determiner,
    /// Common noun
    Noun,
    /// Proper noun
    ProperNoun,
    /// Pronoun
    Pronoun,
    /// Verb or auxiliary
    Verb,
    /// Preposition or conjunction
    Function,
    /// Number
    Numeral,
    /// Punctuation
    Punctuation,
    /// Anything else
    Other,
}

impl PosTag {
    /// Universal-dependencies style label
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Determiner => "DET",
            PosTag::Noun => "NOUN",
            PosTag::ProperNoun => "PROPN",
            PosTag::Pronoun => "PRON",
            PosTag::Verb => "VERB",
            PosTag::Function => "ADP",
            PosTag::Numeral => "NUM",
            PosTag::Punctuation => "PUNCT",
            PosTag::Other => "X",
        }
    }
}

/// Named-entity classes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A person
    Person,
    /// A place or geopolitical entity
    Place,
    /// An organization
    Organization,
    /// Any other class, carrying the engine's own label
    Other(String),
}

/// An entity mention reported by an engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Location in the analyzed text
    pub span: Span,

    /// Entity class
    pub kind: EntityKind,
}

impl Entity {
    /// Create an entity mention
    pub fn new(span: Span, kind: EntityKind) -> Self {
        Self { span, kind }
    }

    /// True for person-class entities
    pub fn is_person(&self) -> bool {
        self.kind == EntityKind::Person
    }
}
