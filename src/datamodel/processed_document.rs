//! The top-level record emitted by the pipeline (C5's output).

use super::{Chunk, DocumentMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The assembled result of ingesting one document (`spec.md` §3).
///
/// Invariants, established and held by [`crate::assemble::DocumentAssembler`]:
/// - `id` is 16 lowercase hex characters.
/// - `checksum` is 64 lowercase hex characters (SHA-256 of `content`).
/// - `chunks` is ordered by `chunk_index`; consecutive chunks are
///   non-decreasing in `start_char`.
/// - every chunk's `document_id` equals this document's `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedDocument {
    pub id: String,
    pub source_path: String,
    pub content: String,
    pub chunks: Vec<Chunk>,
    pub metadata: DocumentMetadata,
    pub processing_timestamp: DateTime<Utc>,
    pub checksum: String,
}

impl ProcessedDocument {
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}
