//! Error types for the ingestion pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error returned by [`crate::process_document`] and the
/// batch/parallel helpers built on top of it.
///
/// All errors unwind the pipeline; no partial [`crate::ProcessedDocument`]
/// is ever returned (see SPEC_FULL.md §7).
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Embed(#[from] EmbedError),

    #[error(transparent)]
    Chunking(#[from] ChunkingError),

    #[error("operation cancelled")]
    Cancelled,

    /// A programming defect, e.g. `sentences.len() != embeddings.len()`.
    /// Not part of the user-visible surface; surfaced here only so a
    /// caller can log and abort rather than panic.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised by a format decoder (C1).
///
/// Recoverable faults (unreadable image, corrupt table) are folded into
/// `metadata["extraction_error"]` by the decoder instead of raising this
/// type; only unrecoverable faults reach here.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unsupported format: {0}")]
    Unsupported(String),

    #[error("malformed document: {0}")]
    Malformed(String),

    #[error("document has no extractable content: {0}")]
    Empty(String),

    #[error("I/O failure reading document: {0}")]
    IoFailure(String),

    #[error("operation cancelled")]
    Cancelled,
}

impl From<std::io::Error> for DecodeError {
    fn from(e: std::io::Error) -> Self {
        DecodeError::IoFailure(e.to_string())
    }
}

/// Errors raised by an [`crate::embed::Embedder`] (C3).
///
/// Per-item encoding never raises; this type is reserved for
/// model-loading or capability failures.
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("failed to load embedding model: {0}")]
    ModelLoad(String),

    #[error("embedder capability unavailable: {0}")]
    CapabilityUnavailable(String),
}

/// Errors raised while configuring or running the semantic chunk
/// builder (C4).
#[derive(Debug, Error)]
pub enum ChunkingError {
    #[error("invalid chunking configuration: {0}")]
    InvalidConfig(String),

    #[error("sentence/embedding count mismatch: {0} sentences, {1} embeddings")]
    CountMismatch(usize, usize),

    #[error("failed to load tokenizer: {0}")]
    TokenizerLoad(String),

    #[error("operation cancelled")]
    Cancelled,
}
