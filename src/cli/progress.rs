//! Batch-processing progress bar (`indicatif`).

use indicatif::{ProgressBar, ProgressStyle};

/// Wraps an `indicatif` bar for batch ingestion; a no-op in quiet mode
/// so callers don't need to branch on `quiet` at every call site.
pub struct BatchProgress {
    bar: Option<ProgressBar>,
}

impl BatchProgress {
    pub fn new(total: usize, quiet: bool) -> Self {
        if quiet || total == 0 {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            )
            .expect("static progress bar template is valid")
            .progress_chars("#>-"),
        );
        Self { bar: Some(bar) }
    }

    pub fn inc(&self, message: impl Into<String>) {
        if let Some(bar) = &self.bar {
            bar.set_message(message.into());
            bar.inc(1);
        }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
