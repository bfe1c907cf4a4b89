//! Output path derivation for single-image and batch runs.
//!
//! Single-image runs never overwrite their input: the resized copy gets a
//! `resized_` prefix and lands next to the source, or inside the directory
//! given with `--output`. Batch runs keep original filenames inside the
//! output directory, which defaults to a `resized/` subdirectory of the
//! input directory.

use std::path::{Path, PathBuf};

/// Prefix applied to single-image outputs so the source is never clobbered.
pub const RESIZED_PREFIX: &str = "resized_";

/// Default batch output subdirectory, created under the input directory.
pub const DEFAULT_BATCH_SUBDIR: &str = "resized";

/// Output path for a single-image run.
///
/// `photo.jpg` becomes `resized_photo.jpg`, placed in `output_dir` when one
/// is given and next to the input otherwise.
pub fn single_output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{RESIZED_PREFIX}{name}");

    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

/// Output directory for a batch run.
pub fn batch_output_dir(input_dir: &Path, output_dir: Option<&Path>) -> PathBuf {
    match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input_dir.join(DEFAULT_BATCH_SUBDIR),
    }
}
