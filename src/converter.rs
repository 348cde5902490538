//! `process_document`: the public entry point (`spec.md` §6).

use crate::cancellation::CancellationToken;
use crate::config::IngestionConfig;
use crate::datamodel::{InputDocument, ProcessedDocument};
use crate::embed::Embedder;
use crate::error::IngestError;
use crate::format::InputFormat;
use crate::pipeline::{Pipeline, SimplePipeline};
use rayon::prelude::*;
use std::path::Path;

/// `process_document(blob_or_path, mime_hint, user_context?) ->
/// ProcessedDocument | Error`. `user_context` is not modeled here (the
/// core has no auth/session concept); callers thread it through their
/// own request context instead.
pub struct DocumentConverter {
    pipeline: SimplePipeline,
}

impl DocumentConverter {
    pub fn new(config: IngestionConfig) -> Self {
        Self {
            pipeline: SimplePipeline::new(config),
        }
    }

    /// Process a single document from a file path, auto-detecting
    /// format from the file extension.
    pub fn process_file<P: AsRef<Path>>(
        &self,
        path: P,
        embedder: &dyn Embedder,
        cancel: &CancellationToken,
    ) -> Result<ProcessedDocument, IngestError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(IngestError::FileNotFound(path.to_path_buf()));
        }

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(InputFormat::from_extension)
            .ok_or_else(|| {
                IngestError::UnsupportedFormat(
                    path.extension()
                        .and_then(|e| e.to_str())
                        .unwrap_or("unknown")
                        .to_string(),
                )
            })?;

        let input = InputDocument::from_path(path.to_path_buf(), format);
        self.pipeline.execute(&input, embedder, cancel)
    }

    /// Process a single document from in-memory bytes with a declared
    /// (or sniffed) format.
    pub fn process_bytes(
        &self,
        bytes: Vec<u8>,
        name: String,
        format: InputFormat,
        embedder: &dyn Embedder,
        cancel: &CancellationToken,
    ) -> Result<ProcessedDocument, IngestError> {
        let input = InputDocument::from_bytes(bytes, name, format);
        self.pipeline.execute(&input, embedder, cancel)
    }

    /// Process many documents in parallel, at document granularity
    /// (`spec.md` §5). Each document gets its own cancellation check;
    /// the shared `embedder` must be `Sync` (its `encode_batch` may be
    /// called concurrently from multiple threads).
    pub fn process_files_parallel<P: AsRef<Path> + Sync>(
        &self,
        paths: &[P],
        embedder: &dyn Embedder,
        cancel: &CancellationToken,
    ) -> Vec<Result<ProcessedDocument, IngestError>> {
        paths
            .par_iter()
            .map(|path| self.process_file(path, embedder, cancel))
            .collect()
    }
}
