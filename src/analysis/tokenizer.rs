//! Word extraction.
//!
//! Words are delimited by whitespace or hyphens. Each delimited span is
//! stripped of leading and trailing characters that are not word characters
//! (ASCII letters, digits, `&`); spans left empty are skipped. Punctuation
//! inside a span is kept and counts towards the word's length.

/// Returns true for characters that make up a word: ASCII alphanumerics and `&`.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '&'
}

/// Returns true for characters that separate words.
pub fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r' | '-')
}

/// Extract the words of a single chunk, left to right.
pub fn words(chunk: &str) -> Words<'_> {
    Words { rest: chunk }
}

/// Lazy iterator over the words of a chunk.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = self.rest.trim_start_matches(is_delimiter);
            if rest.is_empty() {
                self.rest = rest;
                return None;
            }

            let end = rest.find(is_delimiter).unwrap_or(rest.len());
            let (span, tail) = rest.split_at(end);
            self.rest = tail;

            let word = span.trim_matches(|c: char| !is_word_char(c));
            if !word.is_empty() {
                return Some(word);
            }
        }
    }
}
