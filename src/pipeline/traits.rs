//! The pipeline capability contract: C1 through C5 composed leaves-first.

use crate::cancellation::CancellationToken;
use crate::datamodel::{InputDocument, ProcessedDocument};
use crate::embed::Embedder;
use crate::error::IngestError;

pub trait Pipeline {
    fn execute(
        &self,
        input: &InputDocument,
        embedder: &dyn Embedder,
        cancel: &CancellationToken,
    ) -> Result<ProcessedDocument, IngestError>;
}
