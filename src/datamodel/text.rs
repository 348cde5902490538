//! Normalized text: the canonical decoded representation of a document.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// The canonical decoded representation of a document (`spec.md` §3).
///
/// A single string of Unicode codepoints in reading order, with
/// horizontal whitespace collapsed and section/table boundaries
/// represented as sentinel lines. Invariants, enforced by
/// [`NormalizedText::from_raw`]:
///
/// - no run of three or more consecutive newlines
/// - no leading or trailing whitespace
///
/// Character offsets into this string are the authoritative address
/// space for every downstream annotation (sentences, chunks).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Normalize raw decoder output: collapse runs of 3+ newlines to
    /// exactly two, then trim outer whitespace.
    pub fn from_raw(raw: impl AsRef<str>) -> Self {
        let collapsed = collapse_excess_newlines(raw.as_ref());
        Self(collapsed.trim().to_string())
    }

    /// Wrap already-normalized text without re-running the collapse
    /// pass. Used internally where the caller has already guaranteed
    /// the invariants hold (e.g. joining sentinel blocks that were each
    /// normalized individually).
    pub fn assume_normalized(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the underlying `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Character count (not byte count) of the text.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl Deref for NormalizedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn collapse_excess_newlines(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut newline_run = 0usize;

    for ch in text.chars() {
        if ch == '\n' {
            newline_run += 1;
            if newline_run <= 2 {
                result.push(ch);
            }
        } else {
            newline_run = 0;
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_three_or_more_newlines_to_two() {
        let text = NormalizedText::from_raw("a\n\n\n\nb");
        assert_eq!(text.as_str(), "a\n\nb");
    }

    #[test]
    fn trims_outer_whitespace() {
        let text = NormalizedText::from_raw("  \n hello world \n  ");
        assert_eq!(text.as_str(), "hello world");
    }

    #[test]
    fn leaves_single_and_double_newlines_alone() {
        let text = NormalizedText::from_raw("a\nb\n\nc");
        assert_eq!(text.as_str(), "a\nb\n\nc");
    }
}
