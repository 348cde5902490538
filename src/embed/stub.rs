//! A deterministic, hash-based stub embedder for tests and demos.
//!
//! No real sentence-transformer model is bundled (out of scope per
//! `spec.md` §1 non-goals); this exists so the pipeline is fully
//! exercisable without an external model, in the spirit of the
//! `MockEmbedder` pattern used for the same purpose in
//! `examples/lexoliu-aither/rag`.

use super::Embedder;
use crate::datamodel::Embedding;
use crate::error::EmbedError;
use sha2::{Digest, Sha256};

const DEFAULT_DIMENSION: usize = 32;

pub struct StubEmbedder {
    dimension: usize,
}

impl StubEmbedder {
    pub fn new() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
        }
    }

    pub fn with_dimension(dimension: usize) -> Self {
        Self { dimension }
    }

    /// Map one string to a fixed-dimension vector by hashing repeated
    /// salted digests into float components in `[-1.0, 1.0]`.
    fn encode_one(&self, text: &str) -> Embedding {
        let mut values = Vec::with_capacity(self.dimension);
        let mut salt = 0u32;

        while values.len() < self.dimension {
            let mut hasher = Sha256::new();
            hasher.update(text.as_bytes());
            hasher.update(salt.to_le_bytes());
            let digest = hasher.finalize();

            for chunk in digest.chunks_exact(4) {
                if values.len() >= self.dimension {
                    break;
                }
                let bits = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                let normalized = (bits as f64 / u32::MAX as f64) * 2.0 - 1.0;
                values.push(normalized as f32);
            }
            salt += 1;
        }

        Embedding::new(values)
    }
}

impl Default for StubEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl Embedder for StubEmbedder {
    fn encode_batch(&self, texts: &[String]) -> Result<Vec<Embedding>, EmbedError> {
        Ok(texts.iter().map(|t| self.encode_one(t)).collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
