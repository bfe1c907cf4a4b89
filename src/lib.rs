//! # arpr
//!
//! Aspect-ratio preserving image resizer. Give one target dimension and the
//! other follows from the source aspect ratio; give both and they are used
//! exactly as specified. Works on a single image or on every eligible image
//! in a directory (batch mode), writing resized copies with configurable
//! JPEG quality.
//!
//! # Architecture
//!
//! Three layers, leaf first:
//!
//! ```text
//! 1. Resolve   (source w, h) + target spec  →  exact output dimensions
//! 2. Process   one image: identify → resolve → resample → encode
//! 3. Batch     discover directory → process each file → aggregate report
//! ```
//!
//! The batch layer calls the processor once per discovered file; the
//! processor calls the resolver once per image. Everything is synchronous
//! and single-threaded: one decoded image in memory at a time, each file
//! finished before the next begins.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Dimension math, the [`ImageBackend`](imaging::ImageBackend) seam, and the pure-Rust backend |
//! | [`process`] | Single-image pipeline and the [`ProcessEvent`](process::ProcessEvent) progress stream |
//! | [`batch`] | Directory discovery, per-file failure isolation, [`BatchReport`](batch::BatchReport) |
//! | [`naming`] | Output path derivation: `resized_` prefix, default `resized/` subdirectory |
//! | [`output`] | Event → log-line formatting and the `arpr.log` run log |
//!
//! # Design Decisions
//!
//! ## Events Instead of a Global Logger
//!
//! No component touches a process-wide logger. Processing functions take an
//! optional [`ProcessEvent`](process::ProcessEvent) sender; the CLI owns the
//! receiving end and decides what reaches stdout and the log file. Tests pass
//! `None` (silent) or a channel they inspect afterwards.
//!
//! ## Typed Errors per Layer
//!
//! Each layer has its own `thiserror` enum — decode/encode/format errors in
//! the backend, dimension errors in the resolver, both unified in
//! [`process::ProcessError`]. The batch orchestrator records the typed error
//! per failed file rather than catching a blanket failure, so reports can
//! distinguish an undecodable source from a bad output extension.
//!
//! ## Failure Isolation in Batch Mode
//!
//! A batch run attempts every discovered file exactly once. Per-file errors
//! land in the [`BatchReport`](batch::BatchReport); only "the batch cannot
//! run at all" (input is not a directory, output directory cannot be
//! created) is an error for the run itself. The CLI exits zero after a batch
//! even when every file failed — the report is the contract.
//!
//! ## Pure-Rust Imaging
//!
//! The [`imaging`] module uses the `image` crate: Lanczos3 resampling, JPEG
//! encoding at the requested quality, lossless PNG. No ImageMagick, no
//! system codecs — the binary is fully self-contained.

pub mod batch;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
