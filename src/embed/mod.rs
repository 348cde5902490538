//! The embedder capability (C3, `spec.md` §4.3 and §6).

mod stub;

pub use stub::StubEmbedder;

use crate::datamodel::Embedding;
use crate::error::EmbedError;

/// `encode_batch(list<string>) -> list<vector>`, `dimension() -> int`.
///
/// Batch size is tuneable; batching must not affect results (per-item
/// and batched encoding agree up to floating-point tolerance `1e-5`).
/// Per-item encoding never raises; `EmbedError` is reserved for
/// model-loading/capability failures.
pub trait Embedder: Send + Sync {
    fn encode_batch(&self, texts: &[String]) -> Result<Vec<Embedding>, EmbedError>;

    fn dimension(&self) -> usize;
}
