//! Sidecar metadata loading.
//!
//! Each source image may carry a JSON sidecar sharing its base name:
//! `dawn.jpg` + `dawn.json`. The sidecar supplies human-entered fields for
//! the ad index — all optional strings, unknown keys ignored.
//!
//! Sidecars are strictly best-effort. A missing file means "use defaults";
//! a file that fails to parse is reported but also falls back to defaults.
//! Neither case ever fails the image — losing hand-entered copy is
//! preferable to dropping the ad.

use serde::Deserialize;
use std::path::Path;

/// Human-entered fields for one ad, as found in `<name>.json`.
///
/// Every field is optional in the file; absent fields deserialize to empty
/// strings. An empty `name` falls back to the image base name when the
/// index entry is built (see [`AdEntry`](crate::index::AdEntry)).
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Sidecar {
    pub name: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub contact: String,
    pub code: String,
}

/// How the sidecar lookup for one image went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidecarStatus {
    /// `<name>.json` existed and parsed.
    Loaded,
    /// No sidecar file — defaults in use.
    Missing,
    /// Sidecar existed but was not valid JSON; carries the parse error
    /// message. Defaults in use.
    Malformed(String),
}

/// Load the sidecar for the image with base name `stem` in `dir`.
///
/// Always returns a usable [`Sidecar`]; the status tells the caller what to
/// log about it.
pub fn load_sidecar(dir: &Path, stem: &str) -> (Sidecar, SidecarStatus) {
    let path = dir.join(format!("{stem}.json"));
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(_) => return (Sidecar::default(), SidecarStatus::Missing),
    };
    match serde_json::from_str(&raw) {
        Ok(sidecar) => (sidecar, SidecarStatus::Loaded),
        Err(e) => (Sidecar::default(), SidecarStatus::Malformed(e.to_string())),
    }
}
