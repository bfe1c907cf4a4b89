//! Pure calculation functions for output dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use thiserror::Error;

/// Requested target dimensions for a resize.
///
/// Each side is either a positive pixel count or unset. Setting exactly one
/// side asks for a proportional resize; setting both asks for those exact
/// dimensions, aspect ratio be damned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSpec {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl TargetSpec {
    /// Target width only; height follows from the source aspect ratio.
    pub fn width(width: u32) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    /// Target height only; width follows from the source aspect ratio.
    pub fn height(height: u32) -> Self {
        Self {
            width: None,
            height: Some(height),
        }
    }

    /// Exact target dimensions, no proportionality enforced.
    pub fn exact(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }
}

/// Neither target dimension was given, so there is nothing to resolve.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no target dimension given (need a width, a height, or both)")]
pub struct DimensionError;

/// Resolve the final output dimensions for a resize.
///
/// - Width only: height is derived from the source aspect ratio.
/// - Height only: width is derived from the source aspect ratio.
/// - Both: passed through unchanged, even when that distorts the image.
/// - Neither: [`DimensionError`].
///
/// Derived sides truncate, they never round: a 1000x500 source at target
/// width 333 resolves to 333x166, not 333x167.
///
/// # Examples
/// ```
/// # use arpr::imaging::{TargetSpec, resolve_dimensions};
/// assert_eq!(resolve_dimensions((1000, 500), &TargetSpec::width(500)), Ok((500, 250)));
/// assert_eq!(resolve_dimensions((1000, 500), &TargetSpec::height(100)), Ok((200, 100)));
/// ```
pub fn resolve_dimensions(
    source: (u32, u32),
    target: &TargetSpec,
) -> Result<(u32, u32), DimensionError> {
    let (src_w, src_h) = source;
    let aspect = src_w as f64 / src_h as f64;

    match (target.width, target.height) {
        (Some(w), None) => Ok((w, (w as f64 / aspect) as u32)),
        (None, Some(h)) => Ok(((h as f64 * aspect) as u32, h)),
        (Some(w), Some(h)) => Ok((w, h)),
        (None, None) => Err(DimensionError),
    }
}
