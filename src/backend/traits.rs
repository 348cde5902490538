//! The decoder capability contract (C1, `spec.md` §4.1).

use crate::cancellation::CancellationToken;
use crate::datamodel::{DocumentMetadata, InputDocument, NormalizedText};
use crate::error::DecodeError;
use crate::InputFormat;

/// `decode(blob, mime) -> (NormalizedText, DocumentMetadata)` or
/// `DecodeError`.
///
/// Each implementation is stateless and must be deterministic: same
/// input bytes produce identical output text and metadata. Recoverable
/// faults (unreadable image, corrupt table) are folded into
/// `metadata.extraction_error` rather than raised. Implementations with
/// an internal per-item loop (e.g. per-page OCR) must check `cancel`
/// inside that loop, not only on entry, so a trip is observed promptly
/// rather than after the whole document decodes.
pub trait Backend: Send + Sync {
    fn decode(
        &self,
        input: &InputDocument,
        cancel: &CancellationToken,
    ) -> Result<(NormalizedText, DocumentMetadata), DecodeError>;

    /// Whether this backend can decode the given format.
    fn supports_format(&self, format: InputFormat) -> bool;
}
