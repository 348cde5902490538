//! The semantic chunk builder (C4, `spec.md` §4.4): an online greedy
//! clusterer over sentence embeddings, exposed behind a small
//! [`ChunkBuilder`] trait so the algorithm can be swapped in tests.

pub mod base;
pub mod semantic;
pub mod tokenizer;

pub use base::{ChunkBuilder, ChunkBuilderConfig};
pub use semantic::SemanticChunkBuilder;
pub use tokenizer::{HuggingFaceTokenizer, Tokenizer};
