//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, WebP, GIF) | `image` crate decoders |
//! | Auto-orientation | `ImageDecoder::orientation` + `DynamicImage::apply_orientation` |
//! | Resize | `image::DynamicImage::resize` with `Lanczos3` filter |
//! | Encode → WebP (lossy) | `webp::Encoder` (the `image` crate's WebP encoder is lossless-only) |

use super::backend::{BackendError, ImageBackend};
use super::calculations::fit_width;
use super::params::RenderParams;
use image::imageops::FilterType;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader};
use std::path::Path;

/// Pure Rust backend using the `image` and `webp` crates.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk, applying any embedded EXIF
/// orientation so the result is always upright.
fn load_oriented(path: &Path) -> Result<DynamicImage, BackendError> {
    let mut decoder = ImageReader::open(path)
        .map_err(BackendError::Io)?
        .into_decoder()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })?;

    // Unreadable orientation metadata is not worth failing the image over
    let orientation = decoder.orientation().unwrap_or(Orientation::NoTransforms);

    let mut img = DynamicImage::from_decoder(decoder).map_err(|e| {
        BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
    })?;
    img.apply_orientation(orientation);
    Ok(img)
}

/// Encode a DynamicImage as lossy WebP and write it to `path`.
fn save_webp(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    // webp::Encoder only accepts RGB8/RGBA8 buffers
    let converted;
    let encodable = match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => img,
        other if other.color().has_alpha() => {
            converted = DynamicImage::ImageRgba8(other.to_rgba8());
            &converted
        }
        other => {
            converted = DynamicImage::ImageRgb8(other.to_rgb8());
            &converted
        }
    };

    let encoder = webp::Encoder::from_image(encodable)
        .map_err(|e| BackendError::ProcessingFailed(format!("WebP encode failed: {}", e)))?;
    let encoded = encoder.encode(quality as f32);
    std::fs::write(path, &*encoded).map_err(BackendError::Io)
}

impl ImageBackend for RustBackend {
    fn render(&self, params: &RenderParams) -> Result<(), BackendError> {
        let img = load_oriented(&params.source)?;

        let (width, height) = fit_width((img.width(), img.height()), params.max_width);
        let resized = if (width, height) == (img.width(), img.height()) {
            img
        } else {
            img.resize(width, height, FilterType::Lanczos3)
        };

        save_webp(&resized, &params.output, params.quality.value())
    }
}
