//! Batch processing of an image directory.
//!
//! Discovers the eligible images directly inside the input directory,
//! resizes each one with the same target spec, and isolates per-file
//! failures: one bad file never aborts the run. The outcome is a
//! [`BatchReport`] — a report full of failures is still a successful batch;
//! partial failure is communicated through the report, never through the
//! process exit status.
//!
//! ## Validation
//!
//! Discovery enforces these rules:
//! - Non-recursive: subdirectories are never descended into
//! - Extension matching is case-insensitive (`.JPG` is found alongside `.jpg`)
//! - Results are sorted by path so reports are stable across platforms

use crate::imaging::{ImageBackend, Quality, TargetSpec};
use crate::process::{self, ProcessError, ProcessEvent};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;
use walkdir::WalkDir;

/// Extensions eligible for batch discovery.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// One file that failed during a batch run.
#[derive(Debug)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub error: ProcessError,
}

/// Aggregate outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Number of files discovered and attempted.
    pub total: usize,
    /// The files that failed, in attempt order, with their typed errors.
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.total - self.failures.len()
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// List the images directly inside `dir`, sorted by path.
pub fn discover_images(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    if !dir.is_dir() {
        return Err(BatchError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| BatchError::Io(e.into()))?;
        let path = entry.into_path();
        if path.is_file() && has_image_extension(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Resize every eligible image in `input_dir` into `output_dir`.
///
/// Files keep their original names. Each file is attempted exactly once;
/// a failure is recorded in the report and the run continues with the next
/// file. `Err` is reserved for the batch itself being impossible to run
/// (input is not a directory, output directory cannot be created).
pub fn process_batch(
    backend: &impl ImageBackend,
    input_dir: &Path,
    target: &TargetSpec,
    output_dir: &Path,
    quality: Quality,
    events: Option<&Sender<ProcessEvent>>,
) -> Result<BatchReport, BatchError> {
    let images = discover_images(input_dir)?;
    std::fs::create_dir_all(output_dir)?;

    process::emit(events, ProcessEvent::BatchStarted {
        total: images.len(),
    });

    let mut report = BatchReport {
        total: images.len(),
        failures: Vec::new(),
    };

    for path in images {
        // Discovery only yields real files, so file_name is always present
        let output = output_dir.join(path.file_name().unwrap_or_default());
        if let Err(error) = process::process_image(backend, &path, target, &output, quality, events)
        {
            process::emit(events, ProcessEvent::ImageFailed {
                path: path.clone(),
                error: error.to_string(),
            });
            report.failures.push(BatchFailure { path, error });
        }
    }

    process::emit(events, ProcessEvent::BatchFinished {
        total: report.total,
        succeeded: report.succeeded(),
        failed_paths: report.failures.iter().map(|f| f.path.clone()).collect(),
    });

    Ok(report)
}
