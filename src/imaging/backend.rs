//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify and resize.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, everything
//! statically linked into the binary.

use super::params::ResizeParams;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("Failed to encode {path}: {reason}")]
    Encode { path: PathBuf, reason: String },
    #[error("Unsupported output format: .{0}")]
    UnsupportedFormat(String),
}

/// Source dimensions reported by an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Both operations take paths, not decoded buffers, so the processing and
/// batch layers stay backend-agnostic and unit tests can run against a
/// recording mock instead of real codecs.
pub trait ImageBackend {
    /// Get image dimensions. A missing or undecodable file is a
    /// [`BackendError::Decode`].
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode the source, resample to exactly the given dimensions, and
    /// encode to the output path.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;
}
