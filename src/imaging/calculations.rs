//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate output dimensions for a width-constrained resize.
///
/// Caps the width at `max_width` while preserving aspect ratio. Sources
/// already narrower than the cap are returned unchanged — derivatives are
/// never upscaled.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `max_width` - Maximum output width in pixels
///
/// # Returns
/// * `(width, height)` - Final output dimensions
pub fn fit_width(source: (u32, u32), max_width: u32) -> (u32, u32) {
    let (src_w, src_h) = source;

    if src_w <= max_width || src_w == 0 {
        return (src_w, src_h);
    }

    let ratio = max_width as f64 / src_w as f64;
    let h = (src_h as f64 * ratio).round().max(1.0) as u32;
    (max_width, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_width_scales_down_landscape() {
        // 2400x1600 capped at 1200 → 1200x800
        assert_eq!(fit_width((2400, 1600), 1200), (1200, 800));
    }

    #[test]
    fn fit_width_scales_down_portrait() {
        // 600x800 capped at 300 → 300x400
        assert_eq!(fit_width((600, 800), 300), (300, 400));
    }

    #[test]
    fn fit_width_never_upscales() {
        // 100px wide source stays 100px wide
        assert_eq!(fit_width((100, 80), 1200), (100, 80));
    }

    #[test]
    fn fit_width_exact_cap_is_unchanged() {
        assert_eq!(fit_width((1200, 900), 1200), (1200, 900));
    }

    #[test]
    fn fit_width_rounds_height() {
        // 1000x333 capped at 300 → height 333 * 0.3 = 99.9 → 100
        assert_eq!(fit_width((1000, 333), 300), (300, 100));
    }

    #[test]
    fn fit_width_extreme_aspect_keeps_one_pixel() {
        // Height never rounds down to zero
        assert_eq!(fit_width((10_000, 1), 100), (100, 1));
    }

    #[test]
    fn fit_width_zero_size_passthrough() {
        assert_eq!(fit_width((0, 0), 1200), (0, 0));
    }
}
