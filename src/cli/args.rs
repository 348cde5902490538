//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

fn validate_chunk_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("invalid chunk size: {s}"))?;
    if size == 0 {
        return Err("chunk size must be greater than 0".to_string());
    }
    Ok(size)
}

/// ingestion-core CLI: ingest a document (or a directory of them) and
/// emit its `ProcessedDocument` record as JSON.
#[derive(Parser, Debug)]
#[command(name = "ingestion-core")]
#[command(about = "Ingest documents into chunked, embedded ProcessedDocument records", long_about = None)]
#[command(version)]
pub struct CliArgs {
    /// Input file or directory path
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory (default: current directory)
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Filter input files by format (for batch processing)
    #[arg(short = 'f', long = "from", value_name = "FORMAT")]
    pub input_format_filter: Option<String>,

    /// Enable OCR for sparse PDF pages (requires tesseract)
    #[arg(long = "ocr-enabled")]
    pub ocr_enabled: bool,

    /// Disable table extraction for DOCX
    #[arg(long = "no-tables")]
    pub no_tables: bool,

    /// Disable header/footer extraction for DOCX
    #[arg(long = "no-headers-footers")]
    pub no_headers_footers: bool,

    /// Maximum chunk size in characters
    #[arg(long = "chunk-size", value_name = "SIZE", default_value = "1024", value_parser = validate_chunk_size)]
    pub chunk_size: usize,

    /// Chunk overlap in characters
    #[arg(long = "chunk-overlap", value_name = "SIZE", default_value = "256", value_parser = validate_chunk_size)]
    pub chunk_overlap: usize,

    /// Minimum chunk size in characters
    #[arg(long = "min-chunk-size", value_name = "SIZE", default_value = "256", value_parser = validate_chunk_size)]
    pub min_chunk_size: usize,

    /// Centroid similarity threshold governing chunk splits
    #[arg(long = "similarity-threshold", default_value = "0.7")]
    pub similarity_threshold: f32,

    /// Derive document ids from content instead of path + timestamp
    #[arg(long = "content-addressed-ids")]
    pub content_addressed_ids: bool,

    /// Continue processing on error (batch mode)
    #[arg(long = "continue-on-error")]
    pub continue_on_error: bool,

    /// Abort on first error (batch mode)
    #[arg(long = "abort-on-error", conflicts_with = "continue_on_error")]
    pub abort_on_error: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Quiet mode (no output except errors)
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}
