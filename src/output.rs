//! CLI output formatting and the run log.
//!
//! Components report progress as [`ProcessEvent`]s; this module turns events
//! into display lines carrying a severity level. The CLI prints the lines to
//! stdout (debug lines only with `--verbose`) and mirrors every printed line,
//! timestamped, into the `arpr.log` run log.

use crate::process::ProcessEvent;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Severity of a display line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }
}

/// A formatted display line with its severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: Level,
    pub message: String,
}

impl LogLine {
    fn new(level: Level, message: String) -> Self {
        Self { level, message }
    }
}

/// Format one progress event as display lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<LogLine> {
    match event {
        ProcessEvent::ImageOpened {
            path,
            source,
            resolved,
        } => vec![LogLine::new(
            Level::Debug,
            format!(
                "{}: {}x{} -> {}x{}",
                path.display(),
                source.0,
                source.1,
                resolved.0,
                resolved.1
            ),
        )],
        ProcessEvent::ImageSaved { output } => vec![LogLine::new(
            Level::Info,
            format!("Saved: {}", output.display()),
        )],
        ProcessEvent::ImageFailed { path, error } => vec![LogLine::new(
            Level::Error,
            format!("Error processing {}: {}", path.display(), error),
        )],
        ProcessEvent::BatchStarted { total } => vec![LogLine::new(
            Level::Info,
            format!("Found {total} images to process"),
        )],
        ProcessEvent::BatchFinished {
            total,
            succeeded,
            failed_paths,
        } => {
            let mut lines = vec![LogLine::new(
                Level::Info,
                format!("Processed {succeeded}/{total} images successfully"),
            )];
            if !failed_paths.is_empty() {
                lines.push(LogLine::new(
                    Level::Warning,
                    format!("Failed to process {} images", failed_paths.len()),
                ));
                for path in failed_paths {
                    lines.push(LogLine::new(
                        Level::Warning,
                        format!("Failed: {}", path.display()),
                    ));
                }
            }
            lines
        }
    }
}

/// Append-mode run log mirroring everything shown on stdout.
pub struct RunLog {
    file: std::fs::File,
}

impl RunLog {
    /// Open (or create) the log file in append mode.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    /// Write one line, prefixed with a local timestamp and the level label.
    pub fn write(&mut self, line: &LogLine) -> std::io::Result<()> {
        writeln!(
            self.file,
            "{} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            line.level.label(),
            line.message
        )
    }
}
