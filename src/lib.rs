//! # Ad Optimizer
//!
//! Batch image optimizer for the ads site. Reads source images from
//! `static/images/originals/`, produces a full-size and a thumbnail WebP
//! rendition for each, and regenerates `static/ads.json` — the index the
//! static site reads at render time.
//!
//! # Pipeline
//!
//! One shot, no state between runs:
//!
//! ```text
//! scan originals/  →  process each image  →  sort by name  →  ads.json
//! ```
//!
//! Per image: read an optional `<name>.json` sidecar (tolerant — missing or
//! malformed metadata falls back to defaults), decode, auto-orient, resize to
//! at most 1200px wide (quality 80) and 300px wide (quality 70), and emit an
//! index entry pointing at both renditions. A single image failing never
//! aborts the batch; the failure is logged and the file skipped.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`batch`] | The batch driver — scan, per-file processing, aggregation, index write |
//! | [`config`] | [`BatchConfig`](config::BatchConfig): directories, index path, rendition specs |
//! | [`index`] | [`AdEntry`](index::AdEntry) — the record emitted per processed image |
//! | [`metadata`] | Sidecar JSON loading with tolerance for missing/malformed files |
//! | [`imaging`] | Image operations behind the [`ImageBackend`](imaging::ImageBackend) trait |
//! | [`output`] | Log-line formatting — pure `format_*` functions + `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## WebP-Only Output
//!
//! Every rendition is lossy WebP regardless of input format. One modern
//! format keeps the output directory clean and the `<img>` markup trivial,
//! and WebP has had universal browser support for years. The `image` crate
//! only ships a lossless WebP encoder, so encoding goes through the `webp`
//! crate.
//!
//! ## Codec Behind a Trait
//!
//! The decode/orient/resize/encode step is an [`ImageBackend`](imaging::ImageBackend)
//! implementation detail. The driver only knows "render this source to that
//! path, at most this wide, at this quality", so the batch logic — metadata
//! defaulting, error isolation, ordering — is tested with a recording mock
//! and no pixels.
//!
//! ## Per-File Failures Are Values
//!
//! Each file's processing returns a result slot rather than throwing across
//! the driver loop. The driver collects slots (in parallel, order preserved),
//! logs each outcome in input order, and aggregates the successes. Only
//! batch-level errors — output dir creation, directory listing, index write —
//! propagate and fail the run.

pub mod batch;
pub mod config;
pub mod imaging;
pub mod index;
pub mod metadata;
pub mod output;
