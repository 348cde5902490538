//! Document assembler (C5, `spec.md` §4.5): composes decoded content,
//! metadata, and chunks into a `ProcessedDocument`, and establishes
//! content-addressable identity.

use crate::config::IdPolicy;
use crate::datamodel::{Chunk, DocumentMetadata, NormalizedText, ProcessedDocument};
use chrono::Utc;
use sha2::{Digest, Sha256};

pub struct DocumentAssembler {
    id_policy: IdPolicy,
}

impl DocumentAssembler {
    pub fn new(id_policy: IdPolicy) -> Self {
        Self { id_policy }
    }

    /// `assemble(source_path, text, metadata, chunks) -> ProcessedDocument`.
    ///
    /// Stamps `document_id` onto every chunk (and restamps its `id`
    /// accordingly), since the builder may have emitted a placeholder
    /// before the final document id was known.
    pub fn assemble(
        &self,
        source_path: &str,
        text: NormalizedText,
        metadata: DocumentMetadata,
        mut chunks: Vec<Chunk>,
    ) -> ProcessedDocument {
        let content = text.into_string();
        let checksum = sha256_hex(content.as_bytes());
        let processing_timestamp = Utc::now();

        let id = match self.id_policy {
            IdPolicy::PathAndTimestamp => {
                let seed = format!("{source_path}:{}", processing_timestamp.to_rfc3339());
                sha256_hex(seed.as_bytes())[..16].to_string()
            }
            IdPolicy::ContentAddressed => checksum[..16].to_string(),
        };

        for chunk in &mut chunks {
            chunk.restamp_document_id(&id);
        }

        ProcessedDocument {
            id,
            source_path: source_path.to_string(),
            content,
            chunks,
            metadata,
            processing_timestamp,
            checksum,
        }
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_is_sha256_of_content() {
        let assembler = DocumentAssembler::new(IdPolicy::ContentAddressed);
        let doc = assembler.assemble(
            "doc.pdf",
            NormalizedText::from_raw("hello world"),
            DocumentMetadata::new(),
            Vec::new(),
        );
        assert_eq!(doc.checksum, sha256_hex(b"hello world"));
        assert_eq!(doc.checksum.len(), 64);
    }

    #[test]
    fn id_is_sixteen_lowercase_hex_chars() {
        let assembler = DocumentAssembler::new(IdPolicy::PathAndTimestamp);
        let doc = assembler.assemble(
            "doc.pdf",
            NormalizedText::from_raw("hello world"),
            DocumentMetadata::new(),
            Vec::new(),
        );
        assert_eq!(doc.id.len(), 16);
        assert!(doc.id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
    }

    #[test]
    fn content_addressed_policy_is_idempotent_across_paths() {
        let assembler = DocumentAssembler::new(IdPolicy::ContentAddressed);
        let a = assembler.assemble(
            "a.pdf",
            NormalizedText::from_raw("same bytes"),
            DocumentMetadata::new(),
            Vec::new(),
        );
        let b = assembler.assemble(
            "b.pdf",
            NormalizedText::from_raw("same bytes"),
            DocumentMetadata::new(),
            Vec::new(),
        );
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn chunks_are_restamped_with_document_id() {
        let assembler = DocumentAssembler::new(IdPolicy::ContentAddressed);
        let placeholder_chunk = Chunk {
            id: "placeholder_chunk_0".to_string(),
            document_id: "placeholder".to_string(),
            content: "hi there".to_string(),
            embedding: crate::datamodel::Embedding::new(vec![0.0]),
            metadata: DocumentMetadata::new(),
            start_char: 0,
            end_char: 8,
            chunk_index: 0,
        };
        let doc = assembler.assemble(
            "doc.pdf",
            NormalizedText::from_raw("hi there"),
            DocumentMetadata::new(),
            vec![placeholder_chunk],
        );
        assert_eq!(doc.chunks[0].document_id, doc.id);
        assert!(doc.chunks[0].id.starts_with(&doc.id));
    }
}
