//! The pluggable OCR capability consumed by the PDF decoder
//! (`spec.md` §6), used only for sparse pages.

/// `ocr_page(page_image) -> string`. Implementations are expected to
/// honor cancellation promptly (worst case ~1s per `spec.md` §5); this
/// crate does not bundle a real OCR engine, matching the "LLM
/// invocation and OCR modeled as an external capability" design note.
pub trait OcrBackend: Send + Sync {
    fn ocr_page(&self, page_image: &[u8]) -> Result<String, crate::error::DecodeError>;
}

/// An `OcrBackend` that always yields empty text, used when OCR is
/// disabled or no real backend has been wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpOcrBackend;

impl OcrBackend for NoOpOcrBackend {
    fn ocr_page(&self, _page_image: &[u8]) -> Result<String, crate::error::DecodeError> {
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_backend_yields_empty_text() {
        let backend = NoOpOcrBackend;
        assert_eq!(backend.ocr_page(&[]).unwrap(), "");
    }
}
