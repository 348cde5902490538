//! Markdown decoder. Thin and non-mandatory: `spec.md` only requires
//! PDF and DOCX; this demonstrates the dispatch table is genuinely
//! extensible, with deliberately reduced structural fidelity (plain
//! text extraction, no heading/list node typing).

use crate::backend::Backend;
use crate::cancellation::CancellationToken;
use crate::datamodel::{DocumentMetadata, DocumentSource, InputDocument, NormalizedText};
use crate::error::DecodeError;
use crate::InputFormat;
use pulldown_cmark::{Event, Parser};

#[derive(Default)]
pub struct MarkdownBackend {}

impl MarkdownBackend {
    pub fn new() -> Self {
        Self {}
    }

    fn get_content(input: &InputDocument) -> Result<String, DecodeError> {
        match input.source() {
            DocumentSource::FilePath(path) => {
                std::fs::read_to_string(path).map_err(DecodeError::from)
            }
            DocumentSource::Bytes { data, .. } => String::from_utf8(data.clone())
                .map_err(|e| DecodeError::Malformed(format!("invalid UTF-8: {e}"))),
        }
    }
}

impl Backend for MarkdownBackend {
    fn decode(
        &self,
        input: &InputDocument,
        cancel: &CancellationToken,
    ) -> Result<(NormalizedText, DocumentMetadata), DecodeError> {
        if cancel.is_cancelled() {
            return Err(DecodeError::Cancelled);
        }
        let source = Self::get_content(input)?;

        let mut text = String::new();
        for event in Parser::new(&source) {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak | Event::HardBreak => text.push('\n'),
                Event::End(_) => text.push('\n'),
                _ => {}
            }
        }

        if text.trim().is_empty() {
            return Err(DecodeError::Empty("markdown document has no text".to_string()));
        }

        let mut metadata = DocumentMetadata::new();
        metadata.file_name = Some(input.file_name());
        metadata.file_type = Some("md".to_string());
        metadata.word_count = Some(text.split_whitespace().count() as i64);
        metadata.file_size = Some(source.len() as i64);

        Ok((NormalizedText::from_raw(text), metadata))
    }

    fn supports_format(&self, format: InputFormat) -> bool {
        format == InputFormat::Markdown
    }
}
