//! Image operations: dimension math, the backend seam, and the pure-Rust
//! backend that does the pixel work.
//!
//! The module is split into:
//! - **Calculations**: pure functions for dimension math (unit testable)
//! - **Parameters**: data structures describing a resize
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{DimensionError, TargetSpec, resolve_dimensions};
pub use params::{Quality, ResizeParams};
pub use rust_backend::RustBackend;
