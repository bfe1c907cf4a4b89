//! Single-image resize processing.
//!
//! Takes one source image, resolves the output dimensions against the
//! requested target, and hands the resample to the backend. The image is
//! fully decoded, resized, and written before control returns — there is no
//! streaming and no retry; any failure aborts this invocation immediately
//! and writes nothing.
//!
//! ## Progress reporting
//!
//! Components never print. They send [`ProcessEvent`]s to whatever sink the
//! caller provides, and the CLI decides how to render and persist them. A
//! `None` sink silences reporting entirely, which is what tests want.

use crate::imaging::{
    BackendError, DimensionError, ImageBackend, Quality, ResizeParams, TargetSpec,
    resolve_dimensions,
};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image processing failed: {0}")]
    Backend(#[from] BackendError),
    #[error("{0}")]
    Dimension(#[from] DimensionError),
}

/// Progress events emitted while processing.
#[derive(Debug, Clone)]
pub enum ProcessEvent {
    /// Source dimensions probed and output dimensions resolved. Debug-level.
    ImageOpened {
        path: PathBuf,
        source: (u32, u32),
        resolved: (u32, u32),
    },
    /// Resized copy written to disk.
    ImageSaved { output: PathBuf },
    /// One image failed. In batch mode the run continues past this.
    ImageFailed { path: PathBuf, error: String },
    /// Batch discovery finished; processing is about to start.
    BatchStarted { total: usize },
    /// Every file in the batch was attempted.
    BatchFinished {
        total: usize,
        succeeded: usize,
        failed_paths: Vec<PathBuf>,
    },
}

/// Send an event if anyone is listening. A dropped receiver is not an error.
pub(crate) fn emit(events: Option<&Sender<ProcessEvent>>, event: ProcessEvent) {
    if let Some(tx) = events {
        let _ = tx.send(event);
    }
}

/// Resize a single image and write it to `output`.
///
/// Steps: probe the source dimensions (a missing or undecodable file fails
/// here), resolve the output size against `target`, create the output's
/// parent directories, then decode/resample/encode through the backend. The
/// output format follows the output path's extension; see
/// [`RustBackend`](crate::imaging::RustBackend) for the supported set.
///
/// On success exactly one file is written. On failure nothing is left behind.
pub fn process_image(
    backend: &impl ImageBackend,
    input: &Path,
    target: &TargetSpec,
    output: &Path,
    quality: Quality,
    events: Option<&Sender<ProcessEvent>>,
) -> Result<(), ProcessError> {
    let dims = backend.identify(input)?;
    let (width, height) = resolve_dimensions((dims.width, dims.height), target)?;
    emit(
        events,
        ProcessEvent::ImageOpened {
            path: input.to_path_buf(),
            source: (dims.width, dims.height),
            resolved: (width, height),
        },
    );

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    backend.resize(&ResizeParams {
        source: input.to_path_buf(),
        output: output.to_path_buf(),
        width,
        height,
        quality,
    })?;

    emit(
        events,
        ProcessEvent::ImageSaved {
            output: output.to_path_buf(),
        },
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Dimensions;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use std::sync::mpsc;
    use tempfile::TempDir;

    #[test]
    fn width_only_resolves_proportional_height() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 1000,
            height: 500,
        }]);

        process_image(
            &backend,
            Path::new("/in/photo.jpg"),
            &TargetSpec::width(500),
            &tmp.path().join("photo.jpg"),
            Quality::new(85),
            None,
        )
        .unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 2);
        assert!(matches!(&ops[0], RecordedOp::Identify(p) if p == "/in/photo.jpg"));
        assert!(matches!(
            &ops[1],
            RecordedOp::Resize {
                width: 500,
                height: 250,
                quality: 85,
                ..
            }
        ));
    }

    #[test]
    fn both_targets_pass_through_distortion() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 1000,
            height: 500,
        }]);

        process_image(
            &backend,
            Path::new("/in/photo.jpg"),
            &TargetSpec::exact(300, 300),
            &tmp.path().join("photo.jpg"),
            Quality::default(),
            None,
        )
        .unwrap();

        let ops = backend.get_operations();
        assert!(matches!(
            &ops[1],
            RecordedOp::Resize {
                width: 300,
                height: 300,
                ..
            }
        ));
    }

    #[test]
    fn no_target_dimension_is_an_error_before_resizing() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 1000,
            height: 500,
        }]);

        let result = process_image(
            &backend,
            Path::new("/in/photo.jpg"),
            &TargetSpec {
                width: None,
                height: None,
            },
            Path::new("/out/photo.jpg"),
            Quality::default(),
            None,
        );

        assert!(matches!(result, Err(ProcessError::Dimension(_))));
        // Identify ran, but no resize was attempted
        assert_eq!(backend.get_operations().len(), 1);
    }

    #[test]
    fn identify_failure_propagates_as_backend_error() {
        let backend = MockBackend::new();

        let result = process_image(
            &backend,
            Path::new("/in/missing.jpg"),
            &TargetSpec::width(100),
            Path::new("/out/missing.jpg"),
            Quality::default(),
            None,
        );

        assert!(matches!(
            result,
            Err(ProcessError::Backend(BackendError::Decode { .. }))
        ));
        assert_eq!(backend.get_operations().len(), 1);
    }

    #[test]
    fn creates_output_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 100,
            height: 100,
        }]);

        let output = tmp.path().join("nested/deeper/photo.jpg");
        process_image(
            &backend,
            Path::new("/in/photo.jpg"),
            &TargetSpec::width(50),
            &output,
            Quality::default(),
            None,
        )
        .unwrap();

        assert!(output.parent().unwrap().is_dir());
    }

    #[test]
    fn emits_opened_and_saved_events() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 600,
            height: 800,
        }]);
        let (tx, rx) = mpsc::channel();

        process_image(
            &backend,
            Path::new("/in/photo.png"),
            &TargetSpec::height(400),
            &tmp.path().join("photo.png"),
            Quality::default(),
            Some(&tx),
        )
        .unwrap();
        drop(tx);

        let events: Vec<ProcessEvent> = rx.iter().collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            ProcessEvent::ImageOpened {
                source: (600, 800),
                resolved: (300, 400),
                ..
            }
        ));
        assert!(matches!(&events[1], ProcessEvent::ImageSaved { .. }));
    }
}
