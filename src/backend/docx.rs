//! DOCX decoder (C1), grounded on the reference implementation's
//! `DOCXProcessor` (headers/footers/comments sentinel ordering, table
//! border formatting, run-level formatting preservation).

use crate::backend::Backend;
use crate::cancellation::CancellationToken;
use crate::config::IngestionConfig;
use crate::datamodel::{DocumentMetadata, DocumentSource, InputDocument, NormalizedText};
use crate::error::DecodeError;
use crate::InputFormat;
use docx_rs::*;
use std::collections::BTreeSet;
use std::io::Read as _;

/// DOCX decoder.
pub struct DocxBackend {
    config: IngestionConfig,
}

impl DocxBackend {
    pub fn new(config: IngestionConfig) -> Self {
        Self { config }
    }

    fn get_bytes(input: &InputDocument) -> Result<Vec<u8>, DecodeError> {
        match input.source() {
            DocumentSource::FilePath(path) => std::fs::read(path).map_err(DecodeError::from),
            DocumentSource::Bytes { data, .. } => Ok(data.clone()),
        }
    }
}

impl Default for DocxBackend {
    fn default() -> Self {
        Self::new(IngestionConfig::default())
    }
}

impl Backend for DocxBackend {
    fn decode(
        &self,
        input: &InputDocument,
        cancel: &CancellationToken,
    ) -> Result<(NormalizedText, DocumentMetadata), DecodeError> {
        if cancel.is_cancelled() {
            return Err(DecodeError::Cancelled);
        }
        let bytes = Self::get_bytes(input)?;

        let docx = read_docx(&bytes)
            .map_err(|e| DecodeError::Malformed(format!("DOCX parse error: {e}")))?;

        let mut paragraph_count = 0usize;
        let mut table_count = 0usize;
        let mut body = String::new();

        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(paragraph) => {
                    let text = paragraph_text(paragraph, self.config.preserve_formatting);
                    if !text.trim().is_empty() {
                        paragraph_count += 1;
                        body.push_str(text.trim());
                        body.push('\n');
                    }
                }
                DocumentChild::Table(table) if self.config.extract_tables => {
                    if let Some(block) = render_table(table) {
                        table_count += 1;
                        body.push_str(&block);
                        body.push('\n');
                    }
                }
                _ => {}
            }
        }

        if paragraph_count == 0 && table_count == 0 {
            return Err(DecodeError::Empty(
                "DOCX contains no paragraphs or tables".to_string(),
            ));
        }

        let mut sections = String::new();

        if self.config.extract_headers_footers {
            let headers = extract_zip_sentinels(&bytes, "word/header");
            if !headers.is_empty() {
                sections.push_str("=== HEADERS ===\n");
                for line in dedupe_preserve_order(headers) {
                    sections.push_str(&line);
                    sections.push('\n');
                }
            }
        }

        sections.push_str(&body);

        if self.config.extract_headers_footers {
            let footers = extract_zip_sentinels(&bytes, "word/footer");
            if !footers.is_empty() {
                sections.push_str("=== FOOTERS ===\n");
                for line in dedupe_preserve_order(footers) {
                    sections.push_str(&line);
                    sections.push('\n');
                }
            }
        }

        // `docx-rs` does not expose the comments part any more directly
        // than python-docx did in the reference implementation; comment
        // extraction is a documented no-op rather than a guess.
        let comments: Vec<String> = Vec::new();
        if !comments.is_empty() {
            sections.push_str("=== COMMENTS ===\n");
            for c in comments {
                sections.push_str(&c);
                sections.push('\n');
            }
        }

        // Word count covers body (paragraphs + tables) only, excluding the
        // "=== HEADERS ===" / "=== FOOTERS ===" sections appended below.
        let word_count = body.split_whitespace().count();
        let page_count = std::cmp::max(1, word_count / 500);

        let mut metadata = DocumentMetadata::new();
        metadata.file_name = Some(input.file_name());
        metadata.file_type = Some("docx".to_string());
        metadata.word_count = Some(word_count as i64);
        metadata.paragraph_count = Some(paragraph_count as i64);
        metadata.table_count = Some(table_count as i64);
        metadata.page_count = Some(page_count as i64);
        metadata.file_size = Some(bytes.len() as i64);

        Ok((NormalizedText::from_raw(sections), metadata))
    }

    fn supports_format(&self, format: InputFormat) -> bool {
        format == InputFormat::Docx
    }
}

fn paragraph_text(paragraph: &Paragraph, preserve_formatting: bool) -> String {
    let mut out = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            out.push_str(&run_text(run, preserve_formatting));
        }
    }
    out
}

fn run_text(run: &Run, preserve_formatting: bool) -> String {
    let mut text = String::new();
    for child in &run.children {
        if let RunChild::Text(t) = child {
            text.push_str(&t.text);
        }
    }
    if text.is_empty() || !preserve_formatting {
        return text;
    }

    let bold = run.run_property.bold.is_some();
    let italic = run.run_property.italic.is_some();
    let underline = run.run_property.underline.is_some();

    if bold {
        text = format!("**{text}**");
    }
    if italic {
        text = format!("*{text}*");
    }
    if underline {
        text = format!("_{text}_");
    }
    text
}

fn render_table(table: &Table) -> Option<String> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for row_child in &table.rows {
        let TableChild::TableRow(row) = row_child;
        let mut cells = Vec::new();
        for cell_child in &row.cells {
            let TableRowChild::TableCell(cell) = cell_child;
            let mut cell_text = String::new();
            for content in &cell.children {
                if let TableCellContent::Paragraph(p) = content {
                    if !cell_text.is_empty() {
                        cell_text.push(' ');
                    }
                    cell_text.push_str(paragraph_text(p, false).trim());
                }
            }
            cells.push(cell_text);
        }
        rows.push(cells);
    }

    if rows.is_empty() {
        return None;
    }

    let header = rows[0].join(" | ");
    let border = "-".repeat(header.len());
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&header);
    out.push('\n');
    out.push_str(&border);
    out.push('\n');
    for row in &rows[1..] {
        out.push_str(&row.join(" | "));
        out.push('\n');
    }
    out.push_str(&border);
    Some(out)
}

/// Extract plain text from every zip entry under `word/` whose name
/// starts with `prefix` (`header` or `footer`), stripping XML tags.
fn extract_zip_sentinels(bytes: &[u8], prefix: &str) -> Vec<String> {
    let cursor = std::io::Cursor::new(bytes);
    let mut archive = match zip::ZipArchive::new(cursor) {
        Ok(a) => a,
        Err(_) => return Vec::new(),
    };

    let mut names: Vec<String> = (0..archive.len())
        .filter_map(|i| archive.by_index(i).ok().map(|f| f.name().to_string()))
        .filter(|name| name.starts_with(prefix) && name.ends_with(".xml"))
        .collect();
    names.sort();

    let mut out = Vec::new();
    for name in names {
        if let Ok(mut file) = archive.by_name(&name) {
            let mut xml = String::new();
            if file.read_to_string(&mut xml).is_ok() {
                let text = strip_xml_tags(&xml);
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    out.push(trimmed.to_string());
                }
            }
        }
    }
    out
}

fn strip_xml_tags(xml: &str) -> String {
    let mut out = String::with_capacity(xml.len());
    let mut in_tag = false;
    for ch in xml.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn dedupe_preserve_order(lines: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    lines
        .into_iter()
        .filter(|line| seen.insert(line.clone()))
        .collect()
}
