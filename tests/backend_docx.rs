//! DOCX decoder tests, built against real DOCX bytes produced with
//! `docx-rs`'s own writer rather than hand-crafted XML.

use docx_rs::*;
use ingestion_core::backend::{Backend, DocxBackend};
use ingestion_core::datamodel::InputDocument;
use ingestion_core::{CancellationToken, IdPolicy, IngestionConfig, InputFormat};

fn build_docx() -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let cursor = std::io::Cursor::new(&mut buf);
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Plain paragraph text.")))
            .add_paragraph(
                Paragraph::new().add_run(Run::new().add_text("Bold statement.").bold()),
            )
            .add_table(
                Table::new(vec![
                    TableRow::new(vec![
                        TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text("Header A"))),
                        TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text("Header B"))),
                    ]),
                    TableRow::new(vec![
                        TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text("1"))),
                        TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text("2"))),
                    ]),
                ])
            )
            .build()
            .pack(cursor)
            .expect("docx-rs can pack an in-memory document");
    }
    buf
}

fn backend() -> DocxBackend {
    DocxBackend::new(IngestionConfig::default())
}

#[test]
fn docx_backend_supports_only_docx() {
    let backend = backend();
    assert!(backend.supports_format(InputFormat::Docx));
    assert!(!backend.supports_format(InputFormat::Markdown));
    assert!(!backend.supports_format(InputFormat::PDF));
}

#[test]
fn docx_backend_extracts_paragraphs_and_table() {
    let bytes = build_docx();
    let input = InputDocument::from_bytes(bytes, "doc.docx", InputFormat::Docx);

    let (text, metadata) = backend().decode(&input, &CancellationToken::new()).unwrap();
    assert!(text.as_str().contains("Plain paragraph text."));
    assert!(text.as_str().contains("**Bold statement.**"));
    assert!(text.as_str().contains("Header A | Header B"));
    assert_eq!(metadata.paragraph_count, Some(2));
    assert_eq!(metadata.table_count, Some(1));
}

#[test]
fn docx_backend_drops_formatting_when_disabled() {
    let config = IngestionConfig::builder()
        .preserve_formatting(false)
        .id_policy(IdPolicy::PathAndTimestamp)
        .build();
    let bytes = build_docx();
    let input = InputDocument::from_bytes(bytes, "doc.docx", InputFormat::Docx);

    let (text, _) = DocxBackend::new(config).decode(&input, &CancellationToken::new()).unwrap();
    assert!(!text.as_str().contains("**Bold statement.**"));
    assert!(text.as_str().contains("Bold statement."));
}

#[test]
fn docx_backend_rejects_empty_document() {
    let mut buf = Vec::new();
    {
        let cursor = std::io::Cursor::new(&mut buf);
        Docx::new().build().pack(cursor).unwrap();
    }
    let input = InputDocument::from_bytes(buf, "empty.docx", InputFormat::Docx);
    assert!(backend().decode(&input, &CancellationToken::new()).is_err());
}
