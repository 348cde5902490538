//! End-to-end exercise of the full ingestion pipeline: decode -> segment
//! -> embed -> chunk -> assemble.

use ingestion_core::embed::StubEmbedder;
use ingestion_core::{CancellationToken, DocumentConverter, IdPolicy, IngestionConfig, InputFormat};

fn long_markdown() -> Vec<u8> {
    let mut body = String::new();
    body.push_str("# Quarterly Report\n\n");
    for i in 0..40 {
        body.push_str(&format!(
            "Paragraph number {i} describes the ongoing migration project in some detail. \
             It continues with a second sentence about rollout timelines and risks.\n\n"
        ));
    }
    body.into_bytes()
}

#[test]
fn process_bytes_produces_chunks_covering_the_document() {
    let converter = DocumentConverter::new(IngestionConfig::default());
    let embedder = StubEmbedder::new();
    let cancel = CancellationToken::new();

    let document = converter
        .process_bytes(long_markdown(), "report.md".to_string(), InputFormat::Markdown, &embedder, &cancel)
        .unwrap();

    assert!(!document.chunks.is_empty());
    assert_eq!(document.checksum.len(), 64);
    assert_eq!(document.id.len(), 16);

    for chunk in &document.chunks {
        assert_eq!(chunk.document_id, document.id);
        assert!(chunk.id.starts_with(&document.id));
        assert!(!chunk.content.is_empty());
        assert_eq!(chunk.embedding.dimension(), embedder.dimension());
    }
}

#[test]
fn content_addressed_ids_are_stable_across_runs() {
    let config = IngestionConfig::builder().id_policy(IdPolicy::ContentAddressed).build();
    let converter = DocumentConverter::new(config);
    let embedder = StubEmbedder::new();
    let cancel = CancellationToken::new();

    let bytes = b"# Title\n\nA short, stable document body.".to_vec();
    let first = converter
        .process_bytes(bytes.clone(), "a.md".to_string(), InputFormat::Markdown, &embedder, &cancel)
        .unwrap();
    let second = converter
        .process_bytes(bytes, "b.md".to_string(), InputFormat::Markdown, &embedder, &cancel)
        .unwrap();

    assert_eq!(first.id, second.id);
}

#[test]
fn cancelled_token_aborts_processing() {
    let converter = DocumentConverter::new(IngestionConfig::default());
    let embedder = StubEmbedder::new();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = converter.process_bytes(
        long_markdown(),
        "report.md".to_string(),
        InputFormat::Markdown,
        &embedder,
        &cancel,
    );

    assert!(result.is_err());
}

#[test]
fn unsupported_extension_is_reported() {
    let converter = DocumentConverter::new(IngestionConfig::default());
    let embedder = StubEmbedder::new();
    let cancel = CancellationToken::new();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.xyz");
    std::fs::write(&path, b"content").unwrap();

    let result = converter.process_file(&path, &embedder, &cancel);
    assert!(result.is_err());
}

#[test]
fn missing_file_is_reported() {
    let converter = DocumentConverter::new(IngestionConfig::default());
    let embedder = StubEmbedder::new();
    let cancel = CancellationToken::new();

    let result = converter.process_file("/no/such/path.md", &embedder, &cancel);
    assert!(result.is_err());
}
