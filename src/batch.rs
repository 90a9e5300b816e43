//! The batch driver.
//!
//! One run, start to finish:
//!
//! ```text
//! ensure output dir → scan originals/ → render each image → sort → ads.json
//! ```
//!
//! ## Error boundaries
//!
//! Per-file work (sidecar, validation, decode, resize, encode, write) is
//! isolated: each file produces a [`FileOutcome`] slot and a failure only
//! skips that file. Batch-level failures (creating the output directory,
//! listing the input directory, writing the index) propagate as
//! [`BatchError`] and fail the whole run.
//!
//! ## Parallelism
//!
//! Files are processed with rayon's `par_iter`, which preserves slot order,
//! so outcome logging and aggregation happen sequentially in directory
//! order afterwards. Renditions land at per-file distinct paths and nothing
//! else is shared, so the per-file work is embarrassingly parallel.
//!
//! ## Known gap
//!
//! Renditions and index entries for images deleted from `originals/` are
//! never pruned; stale `.webp` files accumulate in the output directory
//! until removed by hand.

use crate::config::BatchConfig;
use crate::imaging::{BackendError, ImageBackend, RenderParams, RenditionSpec, RustBackend};
use crate::index::AdEntry;
use crate::metadata::{self, Sidecar, SidecarStatus};
use crate::output;
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Extensions accepted by the scan filter, matched case-insensitively.
/// Inputs are re-encoded to WebP regardless of source format.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Anything smaller than this is not a plausible image file.
const MIN_IMAGE_BYTES: u64 = 16;

/// Batch-level errors. Any of these aborts the run with a non-zero exit.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-file errors. Caught at the driver loop boundary, logged, and the
/// file skipped.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("file too small or unreadable ({0} bytes)")]
    TooSmall(u64),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Imaging(#[from] BackendError),
}

/// What one run accomplished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries written to the index.
    pub written: usize,
    /// Files that were skipped after a per-file error.
    pub failed: usize,
}

/// Result slot for one scanned file.
struct FileOutcome {
    filename: String,
    stem: String,
    sidecar: SidecarStatus,
    result: Result<AdEntry, ProcessError>,
}

/// Run the batch with the production backend.
pub fn run(config: &BatchConfig) -> Result<RunSummary, BatchError> {
    let backend = RustBackend::new();
    run_with_backend(&backend, config)
}

/// Run the batch with a specific backend (allows testing with a mock).
pub fn run_with_backend(
    backend: &impl ImageBackend,
    config: &BatchConfig,
) -> Result<RunSummary, BatchError> {
    fs::create_dir_all(&config.output_dir)?;

    if !config.originals_dir.exists() {
        output::print_missing_input(&config.originals_dir);
        if !config.index_path.exists() {
            fs::write(&config.index_path, "[]")?;
        }
        return Ok(RunSummary {
            written: 0,
            failed: 0,
        });
    }

    let files = list_images(&config.originals_dir)?;
    output::print_scan_summary(files.len(), &config.originals_dir);

    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .map(|filename| process_image(backend, config, filename))
        .collect();

    let mut entries = Vec::new();
    let mut failed = 0;
    for outcome in outcomes {
        output::print_sidecar_status(&outcome.filename, &outcome.stem, &outcome.sidecar);
        match outcome.result {
            Ok(entry) => {
                output::print_success(&outcome.filename, &entry.image);
                entries.push(entry);
            }
            Err(e) => {
                output::print_failure(&outcome.filename, &e.to_string());
                failed += 1;
            }
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    // Serialize fully in memory first so a failure mid-way never leaves a
    // truncated index on disk.
    let json = serde_json::to_string(&entries)?;
    fs::write(&config.index_path, json)?;
    output::print_run_summary(entries.len(), &config.index_path);

    Ok(RunSummary {
        written: entries.len(),
        failed,
    })
}

/// True if the filename carries a recognized raster image extension.
fn is_image_file(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// List image filenames in `dir`, in directory-listing order.
fn list_images(dir: &Path) -> Result<Vec<String>, BatchError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_image_file(&name) {
            files.push(name);
        }
    }
    Ok(files)
}

/// Process one scanned file into its result slot. Never fails the batch.
fn process_image(
    backend: &impl ImageBackend,
    config: &BatchConfig,
    filename: &str,
) -> FileOutcome {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string());

    let (sidecar, status) = metadata::load_sidecar(&config.originals_dir, &stem);
    let result = render_entry(backend, config, filename, &stem, sidecar);

    FileOutcome {
        filename: filename.to_string(),
        stem,
        sidecar: status,
        result,
    }
}

/// Validate the source, render both derivatives, and build the index entry.
fn render_entry(
    backend: &impl ImageBackend,
    config: &BatchConfig,
    filename: &str,
    stem: &str,
    sidecar: Sidecar,
) -> Result<AdEntry, ProcessError> {
    let source = config.originals_dir.join(filename);

    let len = fs::metadata(&source)?.len();
    if len < MIN_IMAGE_BYTES {
        return Err(ProcessError::TooSmall(len));
    }

    let image = render_derivative(backend, config, &source, &format!("{stem}.webp"), &config.full)?;
    let thumb = render_derivative(
        backend,
        config,
        &source,
        &format!("{stem}-thumb.webp"),
        &config.thumb,
    )?;

    Ok(AdEntry::from_parts(stem, sidecar, image, thumb))
}

/// Render one derivative and return its site-relative path.
///
/// The site-relative prefix is the output directory's final path component
/// (`static/images` → `images/<name>.webp`).
fn render_derivative(
    backend: &impl ImageBackend,
    config: &BatchConfig,
    source: &Path,
    output_name: &str,
    spec: &RenditionSpec,
) -> Result<String, ProcessError> {
    backend.render(&RenderParams {
        source: source.to_path_buf(),
        output: config.output_dir.join(output_name),
        max_width: spec.max_width,
        quality: spec.quality,
    })?;

    let relative_dir = config
        .output_dir
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("");
    Ok(format!("{relative_dir}/{output_name}"))
}
