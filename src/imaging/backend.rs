//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the single operation the batch driver
//! needs: render one derivative from a source image. The production
//! implementation is [`RustBackend`](super::rust_backend::RustBackend) —
//! pure decode/resize in the `image` crate plus lossy WebP encoding via the
//! `webp` crate, all statically linked.

use super::params::RenderParams;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Trait for image processing backends.
///
/// `Sync` so a shared backend reference can be used from rayon's `par_iter`.
pub trait ImageBackend: Sync {
    /// Render one derivative: decode `params.source`, auto-orient, resize to
    /// at most `params.max_width` preserving aspect ratio (never upscaling),
    /// encode WebP at `params.quality`, write to `params.output`.
    fn render(&self, params: &RenderParams) -> Result<(), BackendError>;
}
