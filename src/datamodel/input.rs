//! Input document types

use crate::InputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Input document representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDocument {
    source: DocumentSource,
    format: InputFormat,
}

impl InputDocument {
    /// Create from file path
    pub fn from_path(path: PathBuf, format: InputFormat) -> Self {
        Self {
            source: DocumentSource::FilePath(path),
            format,
        }
    }

    /// Create from bytes
    pub fn from_bytes(data: Vec<u8>, name: impl Into<String>, format: InputFormat) -> Self {
        Self {
            source: DocumentSource::Bytes {
                data,
                name: name.into(),
            },
            format,
        }
    }

    /// Get the document source
    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    /// Get the input format
    pub fn format(&self) -> InputFormat {
        self.format
    }

    /// The name a decoder should record under `metadata.file_name`: the
    /// path's file name component, or the declared name for in-memory
    /// bytes.
    pub fn file_name(&self) -> String {
        match &self.source {
            DocumentSource::FilePath(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            DocumentSource::Bytes { name, .. } => name.clone(),
        }
    }
}

/// Document source (file path or bytes)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DocumentSource {
    FilePath(PathBuf),
    Bytes { data: Vec<u8>, name: String },
}
