//! The single-pass synchronous pipeline (`spec.md` §2, §5): blob ->
//! (C1) -> (normalized text, metadata) -> (C2) -> sentences -> (C3) ->
//! sentence vectors -> (C4) -> chunks -> (C5) -> `ProcessedDocument`.

use crate::assemble::DocumentAssembler;
use crate::backend::{Backend, CsvBackend, DocxBackend, HtmlBackend, MarkdownBackend, PdfBackend};
use crate::cancellation::CancellationToken;
use crate::chunking::{ChunkBuilder, ChunkBuilderConfig, SemanticChunkBuilder};
use crate::config::IngestionConfig;
use crate::datamodel::{DocumentSource, InputDocument, ProcessedDocument};
use crate::embed::Embedder;
use crate::error::IngestError;
use crate::pipeline::Pipeline;
use crate::segment::SentenceSegmenter;
use crate::InputFormat;

/// Dispatch is a plain match over `InputFormat` (the supported-format
/// set is closed at compile time); `Backend` remains the capability
/// seam so new decoders can be added without touching callers.
pub struct SimplePipeline {
    markdown_backend: MarkdownBackend,
    html_backend: HtmlBackend,
    csv_backend: CsvBackend,
    docx_backend: DocxBackend,
    pdf_backend: PdfBackend,
    segmenter: SentenceSegmenter,
    chunk_builder: SemanticChunkBuilder,
    assembler: DocumentAssembler,
    config: IngestionConfig,
}

impl SimplePipeline {
    pub fn new(config: IngestionConfig) -> Self {
        let docx_backend = DocxBackend::new(config.clone());
        let pdf_backend = PdfBackend::with_config(
            crate::backend::pdf::PdfConfig::default()
                .enable_ocr(config.use_ocr)
                .enable_tables(config.extract_tables)
                .enable_images(config.extract_images),
        );

        let chunk_builder = SemanticChunkBuilder::new(ChunkBuilderConfig {
            max_chunk_size: config.chunk_size,
            min_chunk_size: config.min_chunk_size,
            chunk_overlap: config.chunk_overlap,
            similarity_threshold: config.similarity_threshold,
        });

        Self {
            markdown_backend: MarkdownBackend::new(),
            html_backend: HtmlBackend::new(),
            csv_backend: CsvBackend::new(),
            docx_backend,
            pdf_backend,
            segmenter: SentenceSegmenter::new(),
            chunk_builder,
            assembler: DocumentAssembler::new(config.id_policy),
            config,
        }
    }

    fn backend_for(&self, format: InputFormat) -> &dyn Backend {
        match format {
            InputFormat::Markdown => &self.markdown_backend,
            InputFormat::Html => &self.html_backend,
            InputFormat::Csv => &self.csv_backend,
            InputFormat::Docx => &self.docx_backend,
            InputFormat::PDF => &self.pdf_backend,
        }
    }

    fn source_path(&self, input: &InputDocument) -> String {
        match input.source() {
            DocumentSource::FilePath(path) => path.to_string_lossy().into_owned(),
            DocumentSource::Bytes { name, .. } => name.clone(),
        }
    }
}

impl Default for SimplePipeline {
    fn default() -> Self {
        Self::new(IngestionConfig::default())
    }
}

impl Pipeline for SimplePipeline {
    fn execute(
        &self,
        input: &InputDocument,
        embedder: &dyn Embedder,
        cancel: &CancellationToken,
    ) -> Result<ProcessedDocument, IngestError> {
        let span = tracing::info_span!("process_document", format = ?input.format());
        let _enter = span.enter();

        let backend = self.backend_for(input.format());
        let (text, metadata) = backend.decode(input, cancel)?;
        cancel.check()?;

        let sentences = self.segmenter.segment(&text);
        cancel.check()?;
        tracing::debug!(sentence_count = sentences.len(), "segmented document");

        let texts: Vec<String> = sentences.iter().map(|s| s.text.clone()).collect();
        let embeddings = embedder.encode_batch(&texts)?;
        cancel.check()?;

        if sentences.len() != embeddings.len() {
            return Err(IngestError::InvariantViolation(format!(
                "embedder returned {} vectors for {} sentences",
                embeddings.len(),
                sentences.len()
            )));
        }

        // A placeholder document id; the assembler (C5) stamps the
        // real one once it has established identity.
        let chunks = self
            .chunk_builder
            .build("pending", &sentences, &embeddings, &metadata, cancel)?;
        cancel.check()?;
        tracing::debug!(chunk_count = chunks.len(), "built chunks");

        let source_path = self.source_path(input);
        let document = self.assembler.assemble(&source_path, text, metadata, chunks);
        tracing::info!(document_id = %document.id, chunk_count = document.chunk_count(), "assembled document");

        Ok(document)
    }
}

impl SimplePipeline {
    pub fn config(&self) -> &IngestionConfig {
        &self.config
    }
}
