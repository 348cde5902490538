//! JSON Serialization Example
//!
//! This example shows how to convert documents to JSON.
//!
//! Run with:
//! ```bash
//! cargo run --example json_serialization
//! ```

use ingestion_core::embed::StubEmbedder;
use ingestion_core::{CancellationToken, DocumentConverter, IngestionConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== JSON Serialization Example ===\n");

    let converter = DocumentConverter::new(IngestionConfig::default());
    let embedder = StubEmbedder::new();
    let cancel = CancellationToken::new();

    let document = converter.process_bytes(
        b"# Title\n\nParagraph with some body text.".to_vec(),
        "doc.md".to_string(),
        ingestion_core::InputFormat::Markdown,
        &embedder,
        &cancel,
    )?;

    let json = serde_json::to_string_pretty(&document)?;
    println!("{json}");

    Ok(())
}
