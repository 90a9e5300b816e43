//! The ad index record.
//!
//! One [`AdEntry`] is emitted per successfully processed image. The batch
//! driver collects entries, sorts them by `name`, and serializes the lot to
//! `ads.json` for the site to consume.

use crate::metadata::Sidecar;
use serde::{Deserialize, Serialize};

/// One record in `ads.json`. All fields are strings.
///
/// `image` and `thumb` are site-relative paths (e.g. `images/dawn.webp`);
/// the remaining fields come from the sidecar with empty-string defaults,
/// except `name`, which falls back to the image base name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdEntry {
    pub name: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub contact: String,
    pub code: String,
    pub image: String,
    pub thumb: String,
}

impl AdEntry {
    /// Build the entry for one image from its base name, sidecar fields,
    /// and the site-relative rendition paths.
    pub fn from_parts(stem: &str, sidecar: Sidecar, image: String, thumb: String) -> Self {
        let name = if sidecar.name.is_empty() {
            stem.to_string()
        } else {
            sidecar.name
        };
        Self {
            name,
            description: sidecar.description,
            location: sidecar.location,
            category: sidecar.category,
            contact: sidecar.contact,
            code: sidecar.code,
            image,
            thumb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> (String, String) {
        ("images/a.webp".to_string(), "images/a-thumb.webp".to_string())
    }

    #[test]
    fn from_parts_defaults_name_to_stem() {
        let (image, thumb) = paths();
        let entry = AdEntry::from_parts("a", Sidecar::default(), image, thumb);
        assert_eq!(entry.name, "a");
        assert_eq!(entry.description, "");
        assert_eq!(entry.image, "images/a.webp");
        assert_eq!(entry.thumb, "images/a-thumb.webp");
    }

    #[test]
    fn from_parts_sidecar_name_wins() {
        let (image, thumb) = paths();
        let sidecar = Sidecar {
            name: "Beta".to_string(),
            category: "x".to_string(),
            ..Sidecar::default()
        };
        let entry = AdEntry::from_parts("b", sidecar, image, thumb);
        assert_eq!(entry.name, "Beta");
        assert_eq!(entry.category, "x");
        assert_eq!(entry.location, "");
    }

    #[test]
    fn from_parts_empty_sidecar_name_falls_back() {
        let (image, thumb) = paths();
        let sidecar = Sidecar {
            name: String::new(),
            description: "still used".to_string(),
            ..Sidecar::default()
        };
        let entry = AdEntry::from_parts("fallback", sidecar, image, thumb);
        assert_eq!(entry.name, "fallback");
        assert_eq!(entry.description, "still used");
    }

    #[test]
    fn serializes_with_all_string_fields() {
        let (image, thumb) = paths();
        let entry = AdEntry::from_parts("a", Sidecar::default(), image, thumb);
        let json = serde_json::to_value(&entry).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "name",
            "description",
            "location",
            "category",
            "contact",
            "code",
            "image",
            "thumb",
        ] {
            assert!(obj.get(key).unwrap().is_string(), "missing or non-string {key}");
        }
    }
}
