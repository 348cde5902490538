//! Basic Document Ingestion Example
//!
//! Shows how to ingest a document into a chunked, embedded
//! `ProcessedDocument`.
//!
//! Run with:
//! ```bash
//! cargo run --example basic_conversion
//! ```

use ingestion_core::embed::StubEmbedder;
use ingestion_core::{CancellationToken, DocumentConverter, IngestionConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Basic Document Ingestion ===\n");

    let converter = DocumentConverter::new(IngestionConfig::default());
    let embedder = StubEmbedder::new();
    let cancel = CancellationToken::new();

    for (name, format, bytes) in [
        ("test.md", ingestion_core::InputFormat::Markdown, "# Hello World\n\nThis is a **test** document with some content.".as_bytes()),
        ("test.html", ingestion_core::InputFormat::Html, r#"<html><body><h1>Title</h1><p>Paragraph</p></body></html>"#.as_bytes()),
        ("test.csv", ingestion_core::InputFormat::Csv, "Name,Age\nAlice,30\nBob,25\n".as_bytes()),
    ] {
        let document = converter.process_bytes(bytes.to_vec(), name.to_string(), format, &embedder, &cancel)?;
        println!("Ingested {name}:");
        println!("  document id: {}", document.id);
        println!("  chunk count: {}\n", document.chunk_count());
    }

    Ok(())
}
