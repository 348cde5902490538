//! Sentence units emitted by the segmenter (C2).

use serde::{Deserialize, Serialize};

/// A sentence with its half-open byte span `[start, end)` into the
/// NormalizedText it was segmented from.
///
/// `text == NormalizedText[start..end]` after trimming; sentences are
/// non-overlapping and strictly ordered by `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Minimum sentence length, in characters after trimming, below which a
/// segmentation candidate is dropped (`spec.md` §3).
pub const MIN_SENTENCE_LEN: usize = 11;
