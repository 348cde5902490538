//! Conversion orchestration logic.

use crate::cli::args::CliArgs;
use crate::cli::output;
use crate::cli::progress::BatchProgress;
use crate::embed::StubEmbedder;
use crate::{CancellationToken, DocumentConverter, IdPolicy, IngestionConfig};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Single file conversion job.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

/// Result of a single conversion.
pub struct ConversionResult {
    pub job: ConversionJob,
    pub success: bool,
    pub error: Option<String>,
}

/// Main CLI converter orchestrator.
pub struct Converter {
    args: CliArgs,
    converter: DocumentConverter,
    embedder: StubEmbedder,
}

impl Converter {
    pub fn new(args: CliArgs) -> Self {
        let config = IngestionConfig::builder()
            .chunk_size(args.chunk_size)
            .chunk_overlap(args.chunk_overlap)
            .min_chunk_size(args.min_chunk_size)
            .similarity_threshold(args.similarity_threshold)
            .extract_tables(!args.no_tables)
            .extract_headers_footers(!args.no_headers_footers)
            .use_ocr(args.ocr_enabled)
            .id_policy(if args.content_addressed_ids {
                IdPolicy::ContentAddressed
            } else {
                IdPolicy::PathAndTimestamp
            })
            .build();

        Self {
            converter: DocumentConverter::new(config),
            embedder: StubEmbedder::new(),
            args,
        }
    }

    /// Run conversion based on CLI arguments.
    pub fn run(&self) -> Result<()> {
        if !self.args.input.exists() {
            anyhow::bail!("Input path does not exist: {:?}", self.args.input);
        }

        if self.args.input.is_dir() {
            self.run_batch()
        } else {
            self.run_single()
        }
    }

    fn run_single(&self) -> Result<()> {
        let input_path = &self.args.input;
        let output_path = self.get_output_path(input_path)?;

        if self.args.verbose {
            eprintln!("Converting {:?} to {:?}", input_path, output_path);
        }

        let job = ConversionJob {
            input_path: input_path.clone(),
            output_path: output_path.clone(),
        };

        let result = self.convert_file(&job);

        if result.success {
            if !self.args.quiet {
                if let Some(filename) = input_path.file_name() {
                    println!("{}", filename.to_string_lossy());
                }
            }
            Ok(())
        } else {
            anyhow::bail!(
                "Conversion failed: {}",
                result.error.unwrap_or_else(|| "Unknown error".to_string())
            );
        }
    }

    fn run_batch(&self) -> Result<()> {
        let input_dir = &self.args.input;
        let jobs = self.collect_jobs(input_dir)?;

        if jobs.is_empty() {
            anyhow::bail!("No supported files found in directory");
        }

        let progress = BatchProgress::new(jobs.len(), self.args.quiet);
        let mut successful = 0usize;
        let mut failed = 0usize;

        for job in &jobs {
            let result = self.convert_file(job);
            let filename = job
                .input_path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_default();
            progress.inc(filename.clone());

            if result.success {
                successful += 1;
                if !self.args.quiet {
                    println!("{filename}");
                }
            } else {
                failed += 1;
                if !self.args.quiet {
                    eprintln!(
                        "{filename}: {}",
                        result.error.unwrap_or_else(|| "unknown error".to_string())
                    );
                }

                if self.args.abort_on_error {
                    progress.finish();
                    anyhow::bail!("Aborting due to error");
                }
            }
        }

        progress.finish();

        if self.args.verbose {
            eprintln!("{successful} succeeded, {failed} failed");
        }

        if failed > 0 && !self.args.continue_on_error {
            anyhow::bail!("{failed} files failed to convert");
        }

        Ok(())
    }

    fn collect_jobs(&self, dir: &Path) -> Result<Vec<ConversionJob>> {
        let mut jobs = Vec::new();
        self.collect_jobs_recursive(dir, dir, &mut jobs)?;
        Ok(jobs)
    }

    fn collect_jobs_recursive(
        &self,
        root_dir: &Path,
        current_dir: &Path,
        jobs: &mut Vec<ConversionJob>,
    ) -> Result<()> {
        for entry in fs::read_dir(current_dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_dir() {
                self.collect_jobs_recursive(root_dir, &path, jobs)?;
            } else if path.is_file() {
                if !self.format_passes_filter(&path) {
                    continue;
                }

                if self.try_detect_format(&path).is_some() {
                    if let Ok(output_path) = self.get_output_path_for_batch(&path, root_dir) {
                        jobs.push(ConversionJob {
                            input_path: path.clone(),
                            output_path,
                        });
                    }
                } else if !self.args.quiet {
                    if let Some(filename) = path.file_name() {
                        eprintln!("Unsupported format, skipping: {}", filename.to_string_lossy());
                    }
                }
            }
        }

        Ok(())
    }

    fn format_passes_filter(&self, path: &Path) -> bool {
        let Some(ref filter) = self.args.input_format_filter else {
            return true;
        };
        match self.try_detect_format(path) {
            Some(format) => format!("{format:?}").to_lowercase().contains(&filter.to_lowercase()),
            None => false,
        }
    }

    fn convert_file(&self, job: &ConversionJob) -> ConversionResult {
        match self.do_convert(job) {
            Ok(()) => ConversionResult {
                job: job.clone(),
                success: true,
                error: None,
            },
            Err(e) => ConversionResult {
                job: job.clone(),
                success: false,
                error: Some(e.to_string()),
            },
        }
    }

    fn do_convert(&self, job: &ConversionJob) -> Result<()> {
        let cancel = CancellationToken::new();
        let document = self
            .converter
            .process_file(&job.input_path, &self.embedder, &cancel)
            .with_context(|| format!("Failed to convert {:?}", job.input_path))?;

        let output_content = output::to_json(&document)?;

        if let Some(parent) = job.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Unable to create output directory: {parent:?}")
                })?;
            }
        }

        fs::write(&job.output_path, output_content)
            .with_context(|| format!("Unable to write output file: {:?}", job.output_path))?;

        Ok(())
    }

    fn try_detect_format(&self, path: &Path) -> Option<crate::InputFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(crate::InputFormat::from_extension)
    }

    fn get_output_path(&self, input_path: &Path) -> Result<PathBuf> {
        let file_stem = input_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| anyhow::anyhow!("Invalid filename"))?;

        let output_filename = format!("{file_stem}.json");

        Ok(match &self.args.output_dir {
            Some(output_dir) => output_dir.join(output_filename),
            None => PathBuf::from(output_filename),
        })
    }

    fn get_output_path_for_batch(&self, input_path: &Path, root_dir: &Path) -> Result<PathBuf> {
        let file_stem = input_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| anyhow::anyhow!("Invalid filename"))?;

        let output_filename = format!("{file_stem}.json");

        let rel_path = input_path
            .parent()
            .and_then(|p| p.strip_prefix(root_dir).ok())
            .unwrap_or_else(|| Path::new(""));

        Ok(match &self.args.output_dir {
            Some(output_dir) => output_dir.join(rel_path).join(output_filename),
            None => rel_path.join(output_filename),
        })
    }
}
