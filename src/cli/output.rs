//! Output file generation: `ProcessedDocument` as pretty-printed JSON.

use crate::datamodel::ProcessedDocument;
use anyhow::Result;

pub fn to_json(document: &ProcessedDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}
