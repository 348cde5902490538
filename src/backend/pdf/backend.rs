//! PDF decoder implementation.

use super::config::PdfConfig;
use super::document::PdfMetadata;
use super::ocr::{NoOpOcrBackend, OcrBackend};
use crate::backend::Backend;
use crate::cancellation::CancellationToken;
use crate::datamodel::{DocumentMetadata, DocumentSource, InputDocument, NormalizedText};
use crate::error::DecodeError;
use crate::InputFormat;
use pdfium_render::prelude::*;
use std::sync::Arc;

/// A PDF page whose text layer yielded fewer than this many trimmed
/// characters is "sparse" and routed to OCR fallback when enabled
/// (`spec.md` §4.1, GLOSSARY).
const SPARSE_PAGE_THRESHOLD: usize = 50;

/// PDF decoder, grounded on the teacher's own `pdfium-render` dependency.
pub struct PdfBackend {
    config: PdfConfig,
    ocr: Arc<dyn OcrBackend>,
}

impl PdfBackend {
    pub fn new() -> Self {
        Self {
            config: PdfConfig::default(),
            ocr: Arc::new(NoOpOcrBackend),
        }
    }

    pub fn with_config(config: PdfConfig) -> Self {
        Self {
            config,
            ocr: Arc::new(NoOpOcrBackend),
        }
    }

    /// Install a real OCR backend for sparse-page fallback.
    pub fn with_ocr_backend(mut self, ocr: Arc<dyn OcrBackend>) -> Self {
        self.ocr = ocr;
        self
    }

    fn get_bytes(input: &InputDocument) -> Result<Vec<u8>, DecodeError> {
        match input.source() {
            DocumentSource::FilePath(path) => std::fs::read(path).map_err(DecodeError::from),
            DocumentSource::Bytes { data, .. } => Ok(data.clone()),
        }
    }

    fn bind_pdfium() -> Result<Pdfium, DecodeError> {
        let bindings = Pdfium::bind_to_system_library()
            .or_else(|_| Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./")))
            .map_err(|e| DecodeError::IoFailure(format!("failed to bind pdfium library: {e}")))?;
        Ok(Pdfium::new(bindings))
    }
}

impl Default for PdfBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for PdfBackend {
    fn decode(
        &self,
        input: &InputDocument,
        cancel: &CancellationToken,
    ) -> Result<(NormalizedText, DocumentMetadata), DecodeError> {
        if cancel.is_cancelled() {
            return Err(DecodeError::Cancelled);
        }
        let bytes = Self::get_bytes(input)?;
        let pdfium = Self::bind_pdfium()?;

        let password = self.config.password.as_deref();
        let document = pdfium
            .load_pdf_from_byte_vec(bytes.clone(), password)
            .map_err(|e| DecodeError::Malformed(format!("failed to load PDF: {e}")))?;

        let mut page_texts = Vec::new();
        let page_range: Vec<usize> = match &self.config.page_range {
            Some(range) => range.clone().collect(),
            None => (0..document.pages().len() as usize).collect(),
        };

        for page_index in page_range {
            if cancel.is_cancelled() {
                return Err(DecodeError::Cancelled);
            }

            let page = match document.pages().get(page_index as u16) {
                Ok(p) => p,
                Err(_) => continue,
            };
            let mut text = page
                .text()
                .map(|t| t.all())
                .unwrap_or_default();
            let trimmed_len = text.trim().chars().count();

            if trimmed_len < SPARSE_PAGE_THRESHOLD && self.config.enable_ocr {
                match self.render_page_image(&page) {
                    Ok(image_bytes) => match self.ocr.ocr_page(&image_bytes) {
                        Ok(ocr_text) if !ocr_text.trim().is_empty() => text = ocr_text,
                        _ => {}
                    },
                    Err(_) => {}
                }
            }

            page_texts.push(text.trim().to_string());
        }

        let non_empty_pages = page_texts.iter().filter(|t| !t.is_empty()).count();
        if non_empty_pages == 0 {
            return Err(DecodeError::Empty("PDF has zero readable pages".to_string()));
        }

        let content = page_texts.join("\n\n");
        let meta = extract_pdf_metadata(&document);

        let mut metadata = DocumentMetadata::new();
        metadata.title = meta.title;
        metadata.author = meta.author;
        metadata.subject = meta.subject;
        metadata.keywords = meta.keywords;
        metadata.created = meta.creation_date;
        metadata.modified = meta.mod_date;
        if let Some(creator) = meta.creator {
            metadata.set_extra("pdf_creator", creator);
        }
        if let Some(producer) = meta.producer {
            metadata.set_extra("pdf_producer", producer);
        }
        metadata.page_count = Some(document.pages().len() as i64);
        metadata.file_name = Some(input.file_name());
        metadata.file_type = Some("pdf".to_string());
        metadata.file_size = Some(bytes.len() as i64);
        metadata.word_count = Some(content.split_whitespace().count() as i64);

        Ok((NormalizedText::from_raw(content), metadata))
    }

    fn supports_format(&self, format: InputFormat) -> bool {
        matches!(format, InputFormat::PDF)
    }
}

impl PdfBackend {
    fn render_page_image(&self, page: &PdfPage) -> Result<Vec<u8>, DecodeError> {
        let render_config = PdfRenderConfig::new()
            .set_target_width(1600)
            .set_maximum_height(1600);
        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|e| DecodeError::IoFailure(format!("failed to render page for OCR: {e}")))?;
        Ok(bitmap.as_image().to_luma8().into_raw())
    }
}

fn extract_pdf_metadata(document: &PdfDocument) -> PdfMetadata {
    let meta = document.metadata();
    let get = |tag: PdfDocumentMetadataTagType| -> Option<String> {
        meta.get(tag).map(|v| v.value().to_string()).filter(|v| !v.is_empty())
    };

    PdfMetadata {
        title: get(PdfDocumentMetadataTagType::Title),
        author: get(PdfDocumentMetadataTagType::Author),
        subject: get(PdfDocumentMetadataTagType::Subject),
        keywords: get(PdfDocumentMetadataTagType::Keywords),
        creator: get(PdfDocumentMetadataTagType::Creator),
        producer: get(PdfDocumentMetadataTagType::Producer),
        creation_date: get(PdfDocumentMetadataTagType::CreationDate),
        mod_date: get(PdfDocumentMetadataTagType::ModificationDate),
    }
}
