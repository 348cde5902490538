//! Sentence segmenter (C2, `spec.md` §4.2).
//!
//! Rust's `regex` crate has no lookbehind support, so the reference
//! pattern ("whitespace preceded by `.`/`?`/`!` and followed by an
//! uppercase letter, excluding single-letter abbreviations and
//! honorifics") is implemented as a hand-rolled forward scan instead of
//! translated into a regex.
//!
//! Offsets are byte offsets into the `NormalizedText`'s UTF-8
//! representation, the idiomatic choice for Rust string slicing.

use crate::datamodel::{NormalizedText, Sentence, MIN_SENTENCE_LEN};

pub struct SentenceSegmenter;

impl SentenceSegmenter {
    pub fn new() -> Self {
        Self
    }

    pub fn segment(&self, text: &NormalizedText) -> Vec<Sentence> {
        let raw = split_candidates(text.as_str());
        let candidates: Vec<String> = raw
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| s.chars().count() >= MIN_SENTENCE_LEN)
            .collect();

        relocate(text.as_str(), candidates)
    }
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Split `text` into raw (untrimmed) candidate sentences at every
/// boundary matching the reference pattern.
fn split_candidates(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    if chars.is_empty() {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    let mut segment_start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let (byte_pos, ch) = chars[i];

        if matches!(ch, '.' | '?' | '!') {
            // Require at least one whitespace char after the punctuation.
            let mut j = i + 1;
            let mut saw_whitespace = false;
            while j < chars.len() && chars[j].1.is_whitespace() {
                saw_whitespace = true;
                j += 1;
            }

            if saw_whitespace && j < chars.len() && chars[j].1.is_uppercase() {
                let preceding_token = preceding_word(&chars, i);
                if !is_abbreviation(&preceding_token) && !is_honorific(&preceding_token) {
                    let end_byte = byte_pos + ch.len_utf8();
                    candidates.push(text[segment_start..end_byte].to_string());
                    segment_start = chars[j].0;
                    i = j;
                    continue;
                }
            }
        }

        i += 1;
    }

    if segment_start < text.len() {
        candidates.push(text[segment_start..].to_string());
    }

    candidates
}

/// The contiguous run of alphabetic characters immediately preceding
/// `punct_index` (the index of the `.`/`?`/`!` char in `chars`).
fn preceding_word(chars: &[(usize, char)], punct_index: usize) -> String {
    let mut start = punct_index;
    while start > 0 && chars[start - 1].1.is_alphabetic() {
        start -= 1;
    }
    chars[start..punct_index].iter().map(|(_, c)| *c).collect()
}

/// `X.` where `X` is a single uppercase letter (`spec.md` §4.2 rule a).
fn is_abbreviation(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_uppercase(),
        _ => false,
    }
}

/// `Capitalized lowercase` (`spec.md` §4.2 rule b, e.g. `Dr`, `Mr`).
fn is_honorific(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            let rest = chars.as_str();
            !rest.is_empty() && rest.chars().all(|c| c.is_lowercase())
        }
        _ => false,
    }
}

/// Recompute byte offsets for each trimmed candidate against the
/// original text by a forward scan that tracks the next unclaimed
/// position; ties (identical sentences repeated) are broken by taking
/// the earliest unused occurrence.
fn relocate(text: &str, candidates: Vec<String>) -> Vec<Sentence> {
    let mut cursor = 0usize;
    let mut sentences = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let (start, end) = match text[cursor..].find(candidate.as_str()) {
            Some(rel) => {
                let start = cursor + rel;
                (start, start + candidate.len())
            }
            None => {
                // Candidate text shifted relative to the source (should
                // not happen in practice); fall back to the cursor so
                // offsets stay monotonic rather than panicking.
                (cursor, (cursor + candidate.len()).min(text.len()))
            }
        };

        sentences.push(Sentence::new(candidate, start, end));
        cursor = end;
    }

    sentences
}
