//! Batch configuration: directories, index path, rendition specs.
//!
//! The production layout is fixed relative to the project root (the tool
//! takes no flags), but everything the driver touches goes through
//! [`BatchConfig`] so tests can point a run at a temporary directory tree
//! instead of the real `static/` tree.

use crate::imaging::RenditionSpec;
use std::path::{Path, PathBuf};

/// Width cap for the full-size rendition.
pub const FULL_MAX_WIDTH: u32 = 1200;
/// WebP quality for the full-size rendition.
pub const FULL_QUALITY: u32 = 80;
/// Width cap for the thumbnail rendition.
pub const THUMB_MAX_WIDTH: u32 = 300;
/// WebP quality for the thumbnail rendition.
pub const THUMB_QUALITY: u32 = 70;

/// Everything one batch run needs to know.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory holding source images and their optional `<name>.json`
    /// sidecars.
    pub originals_dir: PathBuf,
    /// Directory the WebP renditions are written to. Its final path
    /// component is also the prefix of the site-relative `image`/`thumb`
    /// fields in the index.
    pub output_dir: PathBuf,
    /// The index file, overwritten on every run.
    pub index_path: PathBuf,
    pub full: RenditionSpec,
    pub thumb: RenditionSpec,
}

impl BatchConfig {
    /// The fixed production layout under a project root:
    ///
    /// ```text
    /// <root>/static/images/originals/   sources + sidecars (read-only)
    /// <root>/static/images/             <name>.webp, <name>-thumb.webp
    /// <root>/static/ads.json            the index
    /// ```
    pub fn at_root(root: &Path) -> Self {
        let static_dir = root.join("static");
        let images_dir = static_dir.join("images");
        Self {
            originals_dir: images_dir.join("originals"),
            output_dir: images_dir,
            index_path: static_dir.join("ads.json"),
            full: RenditionSpec::new(FULL_MAX_WIDTH, FULL_QUALITY),
            thumb: RenditionSpec::new(THUMB_MAX_WIDTH, THUMB_QUALITY),
        }
    }
}
