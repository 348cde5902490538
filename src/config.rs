//! Pipeline configuration (`spec.md` §6).

use serde::{Deserialize, Serialize};

/// How a [`crate::datamodel::ProcessedDocument`]'s `id` is derived
/// (`spec.md` §4.5, Open Question resolution recorded in DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdPolicy {
    /// `id = sha256("{source_path}:{timestamp}")[..16]`. The spec
    /// default: identity couples path and ingestion time, so
    /// re-ingesting the same bytes produces a new id.
    PathAndTimestamp,
    /// `id = checksum[..16]`. Re-ingesting identical content yields
    /// the same id, making ingestion idempotent.
    ContentAddressed,
}

impl Default for IdPolicy {
    fn default() -> Self {
        IdPolicy::PathAndTimestamp
    }
}

/// Every tunable the pipeline recognizes, built with defaults matching
/// `spec.md` §4.4 and extended with the decoder toggles from §6.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub similarity_threshold: f32,
    pub min_chunk_size: usize,
    pub extract_tables: bool,
    pub extract_images: bool,
    pub extract_headers_footers: bool,
    pub preserve_formatting: bool,
    pub use_ocr: bool,
    pub embedder_model_name: String,
    pub id_policy: IdPolicy,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1024,
            chunk_overlap: 256,
            similarity_threshold: 0.7,
            min_chunk_size: 256,
            extract_tables: true,
            extract_images: false,
            extract_headers_footers: true,
            preserve_formatting: true,
            use_ocr: false,
            embedder_model_name: "stub".to_string(),
            id_policy: IdPolicy::default(),
        }
    }
}

impl IngestionConfig {
    pub fn builder() -> IngestionConfigBuilder {
        IngestionConfigBuilder::default()
    }
}

/// Builder for [`IngestionConfig`], mirroring the teacher's
/// `HybridChunkerBuilder`/`PdfConfig` fluent-setter shape.
#[derive(Debug, Clone, Default)]
pub struct IngestionConfigBuilder {
    inner: IngestionConfig,
}

macro_rules! setter {
    ($field:ident, $ty:ty) => {
        pub fn $field(mut self, value: $ty) -> Self {
            self.inner.$field = value;
            self
        }
    };
}

impl IngestionConfigBuilder {
    setter!(chunk_size, usize);
    setter!(chunk_overlap, usize);
    setter!(similarity_threshold, f32);
    setter!(min_chunk_size, usize);
    setter!(extract_tables, bool);
    setter!(extract_images, bool);
    setter!(extract_headers_footers, bool);
    setter!(preserve_formatting, bool);
    setter!(use_ocr, bool);

    pub fn embedder_model_name(mut self, value: impl Into<String>) -> Self {
        self.inner.embedder_model_name = value.into();
        self
    }

    pub fn id_policy(mut self, value: IdPolicy) -> Self {
        self.inner.id_policy = value;
        self
    }

    pub fn build(self) -> IngestionConfig {
        self.inner
    }
}
