//! PDF decoder tests against real PDF fixtures built with `printpdf`.

mod helpers;

use helpers::pdf_fixtures::{create_empty_pdf, create_multipage_pdf, create_simple_text_pdf};
use ingestion_core::backend::pdf::PdfConfig;
use ingestion_core::backend::{Backend, PdfBackend};
use ingestion_core::datamodel::InputDocument;
use ingestion_core::{CancellationToken, InputFormat};

#[test]
fn pdf_backend_supports_only_pdf() {
    let backend = PdfBackend::new();
    assert!(backend.supports_format(InputFormat::PDF));
    assert!(!backend.supports_format(InputFormat::Docx));
}

#[test]
fn pdf_backend_extracts_text_from_simple_pdf() {
    let path = create_simple_text_pdf("Hello from a test fixture.\nSecond line of content.");
    let input = InputDocument::from_path(path, InputFormat::PDF);

    let backend = PdfBackend::new();
    let (text, metadata) = backend.decode(&input, &CancellationToken::new()).unwrap();

    assert!(text.as_str().contains("Hello from a test fixture"));
    assert_eq!(metadata.page_count, Some(1));
}

#[test]
fn pdf_backend_reports_page_count_across_pages() {
    let path = create_multipage_pdf(3);
    let input = InputDocument::from_path(path, InputFormat::PDF);

    let backend = PdfBackend::new();
    let (text, metadata) = backend.decode(&input, &CancellationToken::new()).unwrap();

    assert_eq!(metadata.page_count, Some(3));
    assert!(text.as_str().contains("Page 1"));
    assert!(text.as_str().contains("Page 3"));
}

#[test]
fn pdf_backend_rejects_pdf_with_no_readable_text() {
    let path = create_empty_pdf();
    let input = InputDocument::from_path(path, InputFormat::PDF);

    let backend = PdfBackend::with_config(PdfConfig::default().enable_ocr(false));
    assert!(backend.decode(&input, &CancellationToken::new()).is_err());
}
