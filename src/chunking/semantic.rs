//! The semantic chunk builder (C4): online greedy clustering of
//! consecutive sentences by centroid similarity, subject to size and
//! overlap constraints (`spec.md` §4.4). This is the algorithmic heart
//! of the pipeline; the algorithm below is implemented exactly as
//! specified, with no reordering of floating-point summation so results
//! stay bit-identical across runs.

use super::base::{ChunkBuilder, ChunkBuilderConfig};
use crate::cancellation::CancellationToken;
use crate::datamodel::{cosine_similarity, Chunk, DocumentMetadata, Embedding, Sentence};
use crate::error::ChunkingError;

pub struct SemanticChunkBuilder {
    config: ChunkBuilderConfig,
}

impl SemanticChunkBuilder {
    pub fn new(config: ChunkBuilderConfig) -> Self {
        Self { config }
    }
}

impl Default for SemanticChunkBuilder {
    fn default() -> Self {
        Self::new(ChunkBuilderConfig::default())
    }
}

/// Join sentence texts with single spaces, the join rule used
/// throughout §4.4 for both `buffer_text` and emitted `content`.
fn join_sentences(sentences: &[Sentence]) -> String {
    sentences
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

impl ChunkBuilder for SemanticChunkBuilder {
    fn build(
        &self,
        document_id: &str,
        sentences: &[Sentence],
        embeddings: &[Embedding],
        metadata: &DocumentMetadata,
        cancel: &CancellationToken,
    ) -> Result<Vec<Chunk>, ChunkingError> {
        if sentences.len() != embeddings.len() {
            return Err(ChunkingError::CountMismatch(sentences.len(), embeddings.len()));
        }

        if sentences.is_empty() {
            return Ok(Vec::new());
        }

        let cfg = self.config;
        let mut chunks: Vec<Chunk> = Vec::new();

        let mut buffer_sentences: Vec<Sentence> = vec![sentences[0].clone()];
        let mut buffer_vectors: Vec<Embedding> = vec![embeddings[0].clone()];
        let mut char_cursor: usize = sentences[0].start;

        for i in 1..sentences.len() {
            if cancel.is_cancelled() {
                return Err(ChunkingError::Cancelled);
            }

            let centroid = Embedding::mean(&buffer_vectors);
            let sim = cosine_similarity(&centroid, &embeddings[i]);

            let buffer_text = join_sentences(&buffer_sentences);
            let buffer_len = buffer_text.chars().count();
            let incoming_len = sentences[i].text.chars().count();

            let should_split = sim < cfg.similarity_threshold
                || buffer_len > cfg.max_chunk_size
                || (buffer_len > cfg.min_chunk_size && buffer_len + incoming_len > cfg.max_chunk_size);

            if should_split {
                let emitted = emit_chunk(
                    document_id,
                    chunks.len(),
                    &buffer_sentences,
                    &buffer_vectors,
                    char_cursor,
                    metadata,
                );
                let emitted_len = emitted.content.len();

                let (overlap_sentences, overlap_vectors, overlap_len) =
                    overlap_suffix(&buffer_sentences, &buffer_vectors, cfg.chunk_overlap);

                char_cursor += emitted_len.saturating_sub(overlap_len);
                chunks.push(emitted);

                buffer_sentences = overlap_sentences;
                buffer_vectors = overlap_vectors;
                buffer_sentences.push(sentences[i].clone());
                buffer_vectors.push(embeddings[i].clone());
            } else {
                buffer_sentences.push(sentences[i].clone());
                buffer_vectors.push(embeddings[i].clone());
            }
        }

        if !buffer_sentences.is_empty() {
            let emitted = emit_chunk(
                document_id,
                chunks.len(),
                &buffer_sentences,
                &buffer_vectors,
                char_cursor,
                metadata,
            );
            chunks.push(emitted);
        }

        let total_chunks = chunks.len();
        for chunk in &mut chunks {
            chunk.metadata.set_extra("total_chunks", total_chunks as i64);
        }

        Ok(chunks)
    }
}

/// Build a chunk from buffered sentences `[s_a..s_b]` per the emission
/// rules: content is the single-space join, embedding is the
/// unnormalized mean, offsets follow `char_cursor` (a byte offset,
/// despite the name, matching `Sentence::start`/`end`).
fn emit_chunk(
    document_id: &str,
    chunk_index: usize,
    sentences: &[Sentence],
    vectors: &[Embedding],
    char_cursor: usize,
    base_metadata: &DocumentMetadata,
) -> Chunk {
    let content = join_sentences(sentences);
    let content_char_len = content.chars().count();
    let content_byte_len = content.len();
    let embedding = Embedding::mean(vectors);

    let mut metadata = base_metadata.clone();
    metadata.set_extra("chunk_index", chunk_index as i64);
    metadata.set_extra("chunk_method", "semantic");
    metadata.set_extra("chunk_size", content_char_len as i64);

    Chunk {
        id: Chunk::make_id(document_id, chunk_index),
        document_id: document_id.to_string(),
        content: content.clone(),
        embedding,
        metadata,
        start_char: char_cursor,
        end_char: char_cursor + content_byte_len,
        chunk_index,
    }
}

/// Choose the longest suffix `[s_k..s_b]` whose single-space join is at
/// least `chunk_overlap` characters long; the empty suffix if none
/// qualifies. Returns the suffix sentences, their vectors, and the
/// overlap text's *byte* length — the threshold comparison is
/// character-based (`spec.md` §4.4's size unit), but the returned
/// length feeds directly into `char_cursor`, which is a byte offset.
fn overlap_suffix(
    sentences: &[Sentence],
    vectors: &[Embedding],
    chunk_overlap: usize,
) -> (Vec<Sentence>, Vec<Embedding>, usize) {
    if chunk_overlap == 0 || sentences.is_empty() {
        return (Vec::new(), Vec::new(), 0);
    }

    for start in (0..sentences.len()).rev() {
        let suffix = &sentences[start..];
        let text = join_sentences(suffix);
        if text.chars().count() >= chunk_overlap {
            return (suffix.to_vec(), vectors[start..].to_vec(), text.len());
        }
    }

    (Vec::new(), Vec::new(), 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(text: &str, start: usize) -> Sentence {
        let end = start + text.chars().count();
        Sentence::new(text, start, end)
    }

    fn vec3(x: f32, y: f32, z: f32) -> Embedding {
        Embedding::new(vec![x, y, z])
    }

    #[test]
    fn empty_input_yields_empty_chunk_list() {
        let builder = SemanticChunkBuilder::default();
        let chunks = builder
            .build("doc", &[], &[], &DocumentMetadata::new(), &CancellationToken::new())
            .unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn mismatched_lengths_is_an_error() {
        let builder = SemanticChunkBuilder::default();
        let sentences = vec![sentence("This is sentence one.", 0)];
        let err = builder
            .build("doc", &sentences, &[], &DocumentMetadata::new(), &CancellationToken::new())
            .unwrap_err();
        assert!(matches!(err, ChunkingError::CountMismatch(1, 0)));
    }

    #[test]
    fn cancelled_token_stops_the_sentence_loop() {
        let builder = SemanticChunkBuilder::default();
        let sentences = vec![
            sentence("This is a reasonably long first sentence.", 0),
            sentence("Totally unrelated second sentence content.", 43),
        ];
        let embeddings = vec![vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)];
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = builder
            .build("doc", &sentences, &embeddings, &DocumentMetadata::new(), &cancel)
            .unwrap_err();
        assert!(matches!(err, ChunkingError::Cancelled));
    }

    #[test]
    fn identical_vectors_merge_into_one_chunk() {
        let builder = SemanticChunkBuilder::new(ChunkBuilderConfig {
            max_chunk_size: 512,
            min_chunk_size: 128,
            chunk_overlap: 64,
            similarity_threshold: 0.7,
        });

        let texts = [
            "This is the first sentence.",
            "This is the second sentence!",
            "And here's the third sentence?",
            "Finally, the fourth sentence.",
        ];
        let mut sentences = Vec::new();
        let mut cursor = 0;
        for t in texts {
            sentences.push(sentence(t, cursor));
            cursor += t.chars().count() + 1;
        }
        let embeddings: Vec<Embedding> = texts.iter().map(|_| vec3(1.0, 1.0, 1.0)).collect();

        let chunks = builder
            .build("doc", &sentences, &embeddings, &DocumentMetadata::new(), &CancellationToken::new())
            .unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, texts.join(" "));
        assert_eq!(chunks[0].start_char, 0);
        assert_eq!(
            chunks[0].metadata.get_extra("total_chunks").and_then(|v| v.as_i64()),
            Some(1)
        );
    }

    #[test]
    fn dissimilar_vectors_force_a_split() {
        let builder = SemanticChunkBuilder::new(ChunkBuilderConfig {
            max_chunk_size: 512,
            min_chunk_size: 128,
            chunk_overlap: 0,
            similarity_threshold: 0.9,
        });

        let sentences = vec![
            sentence("This is a reasonably long first sentence.", 0),
            sentence("Totally unrelated second sentence content.", 43),
        ];
        let embeddings = vec![vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)];

        let chunks = builder
            .build("doc", &sentences, &embeddings, &DocumentMetadata::new(), &CancellationToken::new())
            .unwrap();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chunk_index, 0);
        assert_eq!(chunks[1].chunk_index, 1);
    }

    #[test]
    fn chunk_ids_are_stamped_with_document_id() {
        let builder = SemanticChunkBuilder::default();
        let sentences = vec![sentence("A reasonably long single sentence here.", 0)];
        let embeddings = vec![vec3(1.0, 0.0, 0.0)];
        let chunks = builder
            .build("abc123", &sentences, &embeddings, &DocumentMetadata::new(), &CancellationToken::new())
            .unwrap();
        assert_eq!(chunks[0].id, "abc123_chunk_0");
        assert_eq!(chunks[0].document_id, "abc123");
    }
}
