//! CSV decoder. Thin and non-mandatory: renders the header row and
//! each data row pipe-joined, one per line, with no column-type
//! inference.

use crate::backend::Backend;
use crate::cancellation::CancellationToken;
use crate::datamodel::{DocumentMetadata, DocumentSource, InputDocument, NormalizedText};
use crate::error::DecodeError;
use crate::InputFormat;
use csv::ReaderBuilder;

#[derive(Default)]
pub struct CsvBackend {}

impl CsvBackend {
    pub fn new() -> Self {
        Self {}
    }

    fn get_bytes(input: &InputDocument) -> Result<Vec<u8>, DecodeError> {
        match input.source() {
            DocumentSource::FilePath(path) => std::fs::read(path).map_err(DecodeError::from),
            DocumentSource::Bytes { data, .. } => Ok(data.clone()),
        }
    }
}

impl Backend for CsvBackend {
    fn decode(
        &self,
        input: &InputDocument,
        cancel: &CancellationToken,
    ) -> Result<(NormalizedText, DocumentMetadata), DecodeError> {
        if cancel.is_cancelled() {
            return Err(DecodeError::Cancelled);
        }
        let bytes = Self::get_bytes(input)?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes.as_slice());

        let headers = reader
            .headers()
            .map_err(|e| DecodeError::Malformed(format!("CSV parse error: {e}")))?
            .iter()
            .collect::<Vec<_>>()
            .join(" | ");

        let mut row_count = 0usize;
        let mut text = String::new();
        text.push_str(&headers);
        text.push('\n');

        for record in reader.records() {
            let record = record.map_err(|e| DecodeError::Malformed(format!("CSV parse error: {e}")))?;
            text.push_str(&record.iter().collect::<Vec<_>>().join(" | "));
            text.push('\n');
            row_count += 1;
        }

        if row_count == 0 {
            return Err(DecodeError::Empty("CSV has no data rows".to_string()));
        }

        let mut metadata = DocumentMetadata::new();
        metadata.file_name = Some(input.file_name());
        metadata.file_type = Some("csv".to_string());
        metadata.table_count = Some(1);
        metadata.set_extra("row_count", row_count as i64);
        metadata.file_size = Some(bytes.len() as i64);

        Ok((NormalizedText::from_raw(text), metadata))
    }

    fn supports_format(&self, format: InputFormat) -> bool {
        format == InputFormat::Csv
    }
}
