//! The chunk-builder capability contract (C4, `spec.md` §4.4).

use crate::cancellation::CancellationToken;
use crate::datamodel::{Chunk, DocumentMetadata, Embedding, Sentence};
use crate::error::ChunkingError;

/// Tunables for [`crate::chunking::semantic::SemanticChunkBuilder`], with
/// defaults matching `spec.md` §4.4.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkBuilderConfig {
    pub max_chunk_size: usize,
    pub min_chunk_size: usize,
    pub chunk_overlap: usize,
    pub similarity_threshold: f32,
}

impl Default for ChunkBuilderConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: 1024,
            min_chunk_size: 256,
            chunk_overlap: 256,
            similarity_threshold: 0.7,
        }
    }
}

/// `build(document_id, sentences, embeddings, metadata) -> [Chunk]`.
///
/// A small capability seam (mirroring the teacher's `BaseChunker`
/// shape) so the algorithm can be swapped out in tests without
/// touching callers. Implementations must check `cancel` inside their
/// per-sentence loop, not only on entry.
pub trait ChunkBuilder {
    fn build(
        &self,
        document_id: &str,
        sentences: &[Sentence],
        embeddings: &[Embedding],
        metadata: &DocumentMetadata,
        cancel: &CancellationToken,
    ) -> Result<Vec<Chunk>, ChunkingError>;
}
