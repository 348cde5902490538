//! Document ingestion and semantic chunking core for
//! retrieval-augmented generation pipelines.
//!
//! Decodes a binary document (PDF, DOCX; Markdown/HTML/CSV as thinner
//! extras), segments it into sentences, embeds them, and groups
//! consecutive sentences into embedding-coherent chunks with a
//! deterministic, content-addressable record set suitable for durable
//! indexing.
//!
//! ```ignore
//! use ingestion_core::{DocumentConverter, IngestionConfig, CancellationToken};
//! use ingestion_core::embed::StubEmbedder;
//!
//! let converter = DocumentConverter::new(IngestionConfig::default());
//! let embedder = StubEmbedder::new();
//! let cancel = CancellationToken::new();
//! let document = converter.process_file("report.pdf", &embedder, &cancel)?;
//! ```

pub mod assemble;
pub mod backend;
pub mod cancellation;
pub mod chunking;
pub mod cli;
pub mod config;
pub mod datamodel;
pub mod embed;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod segment;

mod converter;

pub use cancellation::CancellationToken;
pub use config::{IdPolicy, IngestionConfig};
pub use converter::DocumentConverter;
pub use datamodel::{Chunk, DocumentMetadata, InputDocument, ProcessedDocument};
pub use embed::Embedder;
pub use error::IngestError;
pub use format::InputFormat;
