//! Semantic chunking example.
//!
//! Run with: cargo run --example chunking_basic

use ingestion_core::chunking::{ChunkBuilder, ChunkBuilderConfig, SemanticChunkBuilder};
use ingestion_core::datamodel::{DocumentMetadata, NormalizedText};
use ingestion_core::embed::StubEmbedder;
use ingestion_core::segment::SentenceSegmenter;
use ingestion_core::{CancellationToken, Embedder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Semantic Chunking Example ===\n");

    let text = "Machine learning is a subset of artificial intelligence that enables \
        systems to learn from experience without explicit programming. Many modern \
        applications rely on it for recommendations and perception tasks. Penguins, \
        on the other hand, are flightless birds native to the southern hemisphere. \
        They rely on dense feathers and fat reserves to survive in cold climates.";

    let segmenter = SentenceSegmenter::new();
    let embedder = StubEmbedder::new();
    let builder = SemanticChunkBuilder::new(ChunkBuilderConfig {
        max_chunk_size: 400,
        min_chunk_size: 80,
        chunk_overlap: 40,
        similarity_threshold: 0.7,
    });

    let sentences = segmenter.segment(&NormalizedText::from_raw(text));
    let sentence_texts: Vec<String> = sentences.iter().map(|s| s.text.clone()).collect();
    let embeddings = embedder.encode_batch(&sentence_texts)?;

    let chunks = builder.build(
        "demo-doc",
        &sentences,
        &embeddings,
        &DocumentMetadata::new(),
        &CancellationToken::new(),
    )?;

    for chunk in &chunks {
        println!("--- chunk {} ({} chars) ---", chunk.chunk_index, chunk.chunk_size());
        println!("{}\n", chunk.content);
    }

    Ok(())
}
