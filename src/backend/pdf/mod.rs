//! PDF decoder (C1): per-page text-layer extraction with sparse-page
//! OCR fallback.

pub use backend::PdfBackend;
pub use config::PdfConfig;
pub use document::PdfMetadata;
pub use ocr::{NoOpOcrBackend, OcrBackend};

mod backend;
mod config;
mod document;
mod ocr;
