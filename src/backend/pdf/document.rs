//! PDF document metadata.

use serde::{Deserialize, Serialize};

/// Metadata pulled from a PDF's document info dictionary
/// (`spec.md` §4.1: title, author, subject, creator, creation_date,
/// modification_date, page_count).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PdfMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<String>,
    pub mod_date: Option<String>,
}
