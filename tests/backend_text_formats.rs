//! Decoder contract tests for the thin, non-mandatory text backends
//! (Markdown, HTML, CSV).

use ingestion_core::backend::{Backend, CsvBackend, HtmlBackend, MarkdownBackend};
use ingestion_core::datamodel::InputDocument;
use ingestion_core::{CancellationToken, InputFormat};

#[test]
fn markdown_backend_supports_only_markdown() {
    let backend = MarkdownBackend::new();
    assert!(backend.supports_format(InputFormat::Markdown));
    assert!(!backend.supports_format(InputFormat::Html));
    assert!(!backend.supports_format(InputFormat::Csv));
    assert!(!backend.supports_format(InputFormat::Docx));
}

#[test]
fn markdown_backend_extracts_plain_text() {
    let backend = MarkdownBackend::new();
    let input = InputDocument::from_bytes(
        b"# Title\n\nSome *emphasised* body text.\n".to_vec(),
        "doc.md",
        InputFormat::Markdown,
    );

    let (text, metadata) = backend.decode(&input, &CancellationToken::new()).unwrap();
    assert!(text.as_str().contains("Title"));
    assert!(text.as_str().contains("body text"));
    assert_eq!(metadata.file_type.as_deref(), Some("md"));
    assert!(metadata.word_count.unwrap() > 0);
}

#[test]
fn markdown_backend_rejects_blank_input() {
    let backend = MarkdownBackend::new();
    let input = InputDocument::from_bytes(b"   \n\n".to_vec(), "blank.md", InputFormat::Markdown);
    assert!(backend.decode(&input, &CancellationToken::new()).is_err());
}

#[test]
fn html_backend_extracts_body_text_and_title() {
    let backend = HtmlBackend::new();
    let html = b"<html><head><title>Report</title></head><body><p>Hello there</p></body></html>".to_vec();
    let input = InputDocument::from_bytes(html, "doc.html", InputFormat::Html);

    let (text, metadata) = backend.decode(&input, &CancellationToken::new()).unwrap();
    assert!(text.as_str().contains("Hello there"));
    assert_eq!(metadata.title.as_deref(), Some("Report"));
}

#[test]
fn csv_backend_renders_header_and_rows() {
    let backend = CsvBackend::new();
    let input = InputDocument::from_bytes(
        b"Name,Age\nAlice,30\nBob,25\n".to_vec(),
        "doc.csv",
        InputFormat::Csv,
    );

    let (text, metadata) = backend.decode(&input, &CancellationToken::new()).unwrap();
    assert!(text.as_str().contains("Name | Age"));
    assert!(text.as_str().contains("Alice | 30"));
    assert_eq!(metadata.table_count, Some(1));
}

#[test]
fn csv_backend_rejects_header_only_csv() {
    let backend = CsvBackend::new();
    let input = InputDocument::from_bytes(b"Name,Age\n".to_vec(), "empty.csv", InputFormat::Csv);
    assert!(backend.decode(&input, &CancellationToken::new()).is_err());
}
