//! Document metadata: a mapping from recognized string keys to scalar
//! values, with an open-ended extras map for everything else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A scalar metadata value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Text(String),
    Integer(i64),
    Timestamp(DateTime<Utc>),
}

impl MetadataValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            MetadataValue::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        MetadataValue::Text(s)
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::Text(s.to_string())
    }
}

impl From<i64> for MetadataValue {
    fn from(n: i64) -> Self {
        MetadataValue::Integer(n)
    }
}

impl From<DateTime<Utc>> for MetadataValue {
    fn from(t: DateTime<Utc>) -> Self {
        MetadataValue::Timestamp(t)
    }
}

/// Document-level metadata (`spec.md` §3).
///
/// Recognized keys are promoted to fields; anything else a decoder
/// observes lands in `extras` verbatim. An `extraction_error` lets a
/// decoder record a partial-failure message without aborting the
/// pipeline (§4.1 failure policy).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
    pub category: Option<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
    pub page_count: Option<i64>,
    pub word_count: Option<i64>,
    pub paragraph_count: Option<i64>,
    pub table_count: Option<i64>,
    pub file_size: Option<i64>,
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub extraction_error: Option<String>,

    /// Unknown keys, preserved verbatim, plus the chunk-stage additions
    /// (`chunk_index`, `chunk_method`, `chunk_size`, `total_chunks`)
    /// that C4 layers on top of a cloned DocumentMetadata per chunk.
    #[serde(default)]
    pub extras: BTreeMap<String, MetadataValue>,
}

impl DocumentMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_extra(&mut self, key: impl Into<String>, value: impl Into<MetadataValue>) {
        self.extras.insert(key.into(), value.into());
    }

    pub fn get_extra(&self, key: &str) -> Option<&MetadataValue> {
        self.extras.get(key)
    }

    /// Record a recoverable decode fault without aborting the pipeline.
    pub fn record_extraction_error(&mut self, message: impl Into<String>) {
        self.extraction_error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extras_roundtrip_through_json() {
        let mut meta = DocumentMetadata::new();
        meta.set_extra("chunk_index", 3i64);
        meta.set_extra("chunk_method", "semantic");
        let json = serde_json::to_string(&meta).unwrap();
        let back: DocumentMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get_extra("chunk_index").and_then(|v| v.as_i64()), Some(3));
        assert_eq!(
            back.get_extra("chunk_method").and_then(|v| v.as_str()),
            Some("semantic")
        );
    }
}
