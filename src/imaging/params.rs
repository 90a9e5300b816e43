//! Parameter types for image operations.
//!
//! These structs describe *what* to render, not *how*. They are the interface
//! between the [`batch`](crate::batch) driver (which decides which renditions
//! to create) and the [`backend`](super::backend) (which does the pixel
//! work), so a mock backend can stand in for the real one in tests.

use std::path::PathBuf;

/// Quality setting for lossy WebP encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(80)
    }
}

/// Size and quality of one output rendition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenditionSpec {
    /// Width cap in pixels. Narrower sources are never upscaled.
    pub max_width: u32,
    pub quality: Quality,
}

impl RenditionSpec {
    pub fn new(max_width: u32, quality: u32) -> Self {
        Self {
            max_width,
            quality: Quality::new(quality),
        }
    }
}

/// Full specification for rendering one derivative: decode the source,
/// auto-orient, fit to `max_width`, encode WebP at `quality`, write to
/// `output`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub max_width: u32,
    pub quality: Quality,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(70).value(), 70);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_80() {
        assert_eq!(Quality::default().value(), 80);
    }

    #[test]
    fn rendition_spec_clamps_quality() {
        let spec = RenditionSpec::new(1200, 300);
        assert_eq!(spec.max_width, 1200);
        assert_eq!(spec.quality.value(), 100);
    }
}
