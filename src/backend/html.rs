//! HTML decoder. Thin and non-mandatory, same rationale as the
//! Markdown decoder: plain text extraction via `scraper`, no table
//! structure preserved.

use crate::backend::Backend;
use crate::cancellation::CancellationToken;
use crate::datamodel::{DocumentMetadata, DocumentSource, InputDocument, NormalizedText};
use crate::error::DecodeError;
use crate::InputFormat;
use scraper::{Html, Selector};

#[derive(Default)]
pub struct HtmlBackend {}

impl HtmlBackend {
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

impl Backend for HtmlBackend {
    fn decode(
        &self,
        input: &InputDocument,
        cancel: &CancellationToken,
    ) -> Result<(NormalizedText, DocumentMetadata), DecodeError> {
        if cancel.is_cancelled() {
            return Err(DecodeError::Cancelled);
        }
        let source = Self::get_content(input)?;
        let document = Html::parse_document(&source);

        let title_selector = Selector::parse("title").unwrap();
        let title = document
            .select(&title_selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty());

        let body_selector = Selector::parse("body").unwrap();
        let text: String = match document.select(&body_selector).next() {
            Some(body) => body.text().collect::<Vec<_>>().join(" "),
            None => document.root_element().text().collect::<Vec<_>>().join(" "),
        };

        if text.trim().is_empty() {
            return Err(DecodeError::Empty("HTML document has no text".to_string()));
        }

        let mut metadata = DocumentMetadata::new();
        metadata.title = title;
        metadata.file_name = Some(input.file_name());
        metadata.file_type = Some("html".to_string());
        metadata.word_count = Some(text.split_whitespace().count() as i64);
        metadata.file_size = Some(source.len() as i64);

        Ok((NormalizedText::from_raw(text), metadata))
    }

    fn supports_format(&self, format: InputFormat) -> bool {
        format == InputFormat::Html
    }
}
