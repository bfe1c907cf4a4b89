//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the processing layer (which decides what to resize and
//! where the result goes) and the [`backend`](super::backend) (which does the
//! actual pixel work). This separation allows swapping backends (e.g. for
//! testing with a mock) without changing processing logic.

use std::path::PathBuf;

/// Quality setting for lossy JPEG encoding (0-100).
///
/// Higher retains more detail at larger file size. Ignored by lossless
/// output formats. Clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(95)
    }
}

/// Full specification for a resize: source, output path, exact target
/// dimensions, quality.
///
/// The dimensions here are already resolved — the backend resamples to
/// exactly `width` x `height` and does not preserve aspect ratio itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
}
