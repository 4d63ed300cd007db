//! Sentence segmentation and tokenization shared by every engine

use navigator_domain::{Span, Token};
use regex::Regex;
use std::sync::LazyLock;

/// Words, with internal apostrophes or hyphens, or single symbols
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’\-][\p{L}\p{N}]+)*|[^\s\p{L}\p{N}]")
        .expect("static token regex")
});

/// Abbreviations whose trailing period does not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "st", "jr", "sr", "prof", "capt", "col", "gen", "lt", "rev",
    "hon", "mt", "sgt", "messrs", "mme", "mlle",
];

/// Split `text` into tokens, in text order
pub fn tokenize(text: &str) -> Vec<Token> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| Token::new(m.as_str(), Span::new(m.start(), m.end())))
        .collect()
}

/// Split `text` into trimmed sentence spans, in text order
///
/// A sentence ends at a run of `.`, `!` or `?` (plus any closing quotes or
/// brackets) followed by whitespace or the end of text, or at a blank line.
/// A single period after a known abbreviation does not end a sentence, nor
/// does one after a lone capital initial (other than the pronoun "I") that is
/// followed by another capitalized word.
pub fn segment_sentences(text: &str) -> Vec<Span> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut spans = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (offset, ch) = chars[i];

        if matches!(ch, '.' | '!' | '?') {
            let mut j = i + 1;
            while j < chars.len() && (matches!(chars[j].1, '.' | '!' | '?') || is_closer(chars[j].1)) {
                j += 1;
            }
            let end = chars.get(j).map_or(text.len(), |&(o, _)| o);
            let at_break = j >= chars.len() || chars[j].1.is_whitespace();
            let abbreviated = ch == '.'
                && j == i + 1
                && ends_with_abbreviation(&text[start..offset], &text[end..]);

            if at_break && !abbreviated {
                push_trimmed(&mut spans, text, start, end);
                start = end;
            }
            i = j;
            continue;
        }

        if ch == '\n' && blank_line_follows(&chars, i + 1) {
            push_trimmed(&mut spans, text, start, offset);
            start = offset;
        }

        i += 1;
    }

    push_trimmed(&mut spans, text, start, text.len());
    spans
}

fn is_closer(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '”' | '’' | ')' | ']' | '»')
}

fn blank_line_follows(chars: &[(usize, char)], from: usize) -> bool {
    for &(_, ch) in &chars[from.min(chars.len())..] {
        match ch {
            '\n' => return true,
            ' ' | '\t' | '\r' => continue,
            _ => return false,
        }
    }
    false
}

fn ends_with_abbreviation(before: &str, after: &str) -> bool {
    let word = before
        .rsplit(|c: char| !c.is_alphabetic())
        .next()
        .unwrap_or("");

    let mut letters = word.chars();
    if let (Some(first), None) = (letters.next(), letters.next()) {
        return is_initial(first, after);
    }

    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}

fn is_initial(letter: char, after: &str) -> bool {
    letter.is_uppercase()
        && letter != 'I'
        && after
            .trim_start()
            .chars()
            .next()
            .is_some_and(char::is_uppercase)
}

fn push_trimmed(spans: &mut Vec<Span>, text: &str, start: usize, end: usize) {
    let slice = &text[start..end];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }
    let leading = slice.len() - slice.trim_start().len();
    let from = start + leading;
    spans.push(Span::new(from, from + trimmed.len()));
}
