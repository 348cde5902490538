//! Contract tests for the capability traits (`Backend`, `Embedder`,
//! `ChunkBuilder`, `Pipeline`): a minimal external implementation must
//! be usable as a trait object through the public API, without reaching
//! into any crate-internal detail.

use ingestion_core::backend::Backend;
use ingestion_core::cancellation::CancellationToken;
use ingestion_core::datamodel::{DocumentMetadata, Embedding, InputDocument, NormalizedText};
use ingestion_core::embed::Embedder;
use ingestion_core::error::{DecodeError, EmbedError};
use ingestion_core::InputFormat;

struct EchoBackend;

impl Backend for EchoBackend {
    fn decode(
        &self,
        _input: &InputDocument,
        _cancel: &CancellationToken,
    ) -> Result<(NormalizedText, DocumentMetadata), DecodeError> {
        Ok((NormalizedText::from_raw("echoed text"), DocumentMetadata::new()))
    }

    fn supports_format(&self, format: InputFormat) -> bool {
        format == InputFormat::Markdown
    }
}

#[test]
fn backend_is_object_safe() {
    let backend: Box<dyn Backend> = Box::new(EchoBackend);
    let input = InputDocument::from_bytes(b"ignored".to_vec(), "doc.md", InputFormat::Markdown);
    let (text, _) = backend.decode(&input, &CancellationToken::new()).unwrap();
    assert_eq!(text.as_str(), "echoed text");
    assert!(backend.supports_format(InputFormat::Markdown));
}

struct ConstantEmbedder;

impl Embedder for ConstantEmbedder {
    fn encode_batch(&self, texts: &[String]) -> Result<Vec<Embedding>, EmbedError> {
        Ok(texts.iter().map(|_| Embedding::new(vec![1.0, 0.0])).collect())
    }

    fn dimension(&self) -> usize {
        2
    }
}

#[test]
fn embedder_is_object_safe_and_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Box<dyn Embedder>>();

    let embedder: Box<dyn Embedder> = Box::new(ConstantEmbedder);
    let vectors = embedder
        .encode_batch(&["a".to_string(), "b".to_string()])
        .unwrap();
    assert_eq!(vectors.len(), 2);
    assert_eq!(embedder.dimension(), 2);
}
