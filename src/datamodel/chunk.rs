//! Chunk records emitted by the semantic chunk builder (C4).

use super::{DocumentMetadata, Embedding};
use serde::{Deserialize, Serialize};

/// A contiguous span of one or more sentences, the atomic unit of
/// downstream retrieval (`spec.md` §3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    pub document_id: String,
    pub content: String,
    pub embedding: Embedding,
    pub metadata: DocumentMetadata,
    pub start_char: usize,
    pub end_char: usize,
    pub chunk_index: usize,
}

impl Chunk {
    /// `id = "{document_id}_chunk_{chunk_index}"` per `spec.md` §3.
    pub fn make_id(document_id: &str, chunk_index: usize) -> String {
        format!("{document_id}_chunk_{chunk_index}")
    }

    /// Character length of `content`.
    pub fn chunk_size(&self) -> usize {
        self.content.chars().count()
    }

    /// Stamp `document_id` onto this chunk and its embedded `id`,
    /// overwriting any placeholder the builder emitted before the
    /// assembler (C5) established the document's final id.
    pub fn restamp_document_id(&mut self, document_id: &str) {
        self.id = Self::make_id(document_id, self.chunk_index);
        self.document_id = document_id.to_string();
    }
}
