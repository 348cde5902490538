//! Cooperative cancellation (`spec.md` §5).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::IngestError;

/// A cheap, cloneable handle a caller can trip to abort an in-flight
/// `process_document` call at its next checked boundary: before each
/// decoded page (C1), after segmentation (C2), after each embedding
/// batch (C3), before each sentence considered by the chunk builder
/// (C4).
///
/// Tripping the token never produces a partial `ProcessedDocument`; the
/// pipeline unwinds with [`IngestError::Cancelled`].
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Check the token, returning `Err(Cancelled)` if tripped. Call at
    /// every boundary named in `spec.md` §5.
    pub fn check(&self) -> Result<(), IngestError> {
        if self.is_cancelled() {
            Err(IngestError::Cancelled)
        } else {
            Ok(())
        }
    }
}
