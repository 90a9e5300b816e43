//! CLI output formatting for the batch run.
//!
//! Every line the tool prints is built by a pure `format_*` function
//! (returns strings, no I/O, unit testable) with a `print_*` wrapper that
//! routes it to the right stream: informational and success lines go to
//! stdout, warnings, per-file errors and fatal errors go to stderr.
//!
//! Line format is `[LEVEL] message`. Per-file failure lines always carry
//! the offending filename and the underlying error message, so a run's log
//! is enough to diagnose which source image to fix.

use crate::metadata::SidecarStatus;
use std::path::Path;

/// Lines for the "input directory does not exist" terminal state.
pub fn format_missing_input(dir: &Path) -> Vec<String> {
    vec![
        format!("[INFO] Originals directory does not exist: {}", dir.display()),
        "[INFO] Nothing to process. Exiting with success.".to_string(),
    ]
}

/// Scan summary: how many image files matched the extension filter.
pub fn format_scan_summary(count: usize, dir: &Path) -> String {
    format!("[INFO] Found {} image(s) in {}", count, dir.display())
}

/// Sidecar lookup note for one file, if there is anything to say.
///
/// A loaded sidecar is the quiet path; missing sidecars get an
/// informational line and malformed ones a warning with the parse error.
pub fn format_sidecar_status(filename: &str, stem: &str, status: &SidecarStatus) -> Option<String> {
    match status {
        SidecarStatus::Loaded => None,
        SidecarStatus::Missing => Some(format!(
            "[INFO] No metadata for {filename} (expected {stem}.json), using defaults"
        )),
        SidecarStatus::Malformed(msg) => Some(format!(
            "[WARN] Could not parse metadata {stem}.json for {filename}: {msg}"
        )),
    }
}

/// Success line for one processed file.
pub fn format_success(filename: &str, image_path: &str) -> String {
    format!("[OK] Processed {filename} -> {image_path}")
}

/// Failure line for one skipped file.
pub fn format_failure(filename: &str, error: &str) -> String {
    format!("[ERROR] Failed to process {filename}: {error}")
}

/// Run summary after the index is written.
pub fn format_run_summary(count: usize, index_path: &Path) -> String {
    format!("[OK] Wrote {} ad(s) to {}", count, index_path.display())
}

/// Fatal error with its full source chain, one line per cause.
pub fn format_fatal(error: &dyn std::error::Error) -> Vec<String> {
    let mut lines = vec![format!("[FATAL] {error}")];
    let mut source = error.source();
    while let Some(cause) = source {
        lines.push(format!("  caused by: {cause}"));
        source = cause.source();
    }
    lines
}

pub fn print_missing_input(dir: &Path) {
    for line in format_missing_input(dir) {
        println!("{line}");
    }
}

pub fn print_scan_summary(count: usize, dir: &Path) {
    println!("{}", format_scan_summary(count, dir));
}

pub fn print_sidecar_status(filename: &str, stem: &str, status: &SidecarStatus) {
    if let Some(line) = format_sidecar_status(filename, stem, status) {
        match status {
            SidecarStatus::Malformed(_) => eprintln!("{line}"),
            _ => println!("{line}"),
        }
    }
}

pub fn print_success(filename: &str, image_path: &str) {
    println!("{}", format_success(filename, image_path));
}

pub fn print_failure(filename: &str, error: &str) {
    eprintln!("{}", format_failure(filename, error));
}

pub fn print_run_summary(count: usize, index_path: &Path) {
    println!("{}", format_run_summary(count, index_path));
}

pub fn print_fatal(error: &dyn std::error::Error) {
    for line in format_fatal(error) {
        eprintln!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_mentions_directory() {
        let lines = format_missing_input(Path::new("/site/static/images/originals"));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("originals"));
        assert!(lines[0].starts_with("[INFO]"));
    }

    #[test]
    fn scan_summary_counts() {
        let line = format_scan_summary(3, Path::new("/in"));
        assert_eq!(line, "[INFO] Found 3 image(s) in /in");
    }

    #[test]
    fn sidecar_loaded_is_quiet() {
        assert_eq!(
            format_sidecar_status("a.jpg", "a", &SidecarStatus::Loaded),
            None
        );
    }

    #[test]
    fn sidecar_missing_is_informational() {
        let line = format_sidecar_status("a.jpg", "a", &SidecarStatus::Missing).unwrap();
        assert!(line.starts_with("[INFO]"));
        assert!(line.contains("a.jpg"));
        assert!(line.contains("a.json"));
    }

    #[test]
    fn sidecar_malformed_carries_parse_error() {
        let status = SidecarStatus::Malformed("expected value at line 1".to_string());
        let line = format_sidecar_status("c.jpg", "c", &status).unwrap();
        assert!(line.starts_with("[WARN]"));
        assert!(line.contains("c.jpg"));
        assert!(line.contains("expected value at line 1"));
    }

    #[test]
    fn failure_line_names_file_and_error() {
        let line = format_failure("d.jpg", "file too small or unreadable (0 bytes)");
        assert_eq!(
            line,
            "[ERROR] Failed to process d.jpg: file too small or unreadable (0 bytes)"
        );
    }

    #[test]
    fn fatal_walks_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = crate::batch::BatchError::Io(io);
        let lines = format_fatal(&err);
        assert!(lines[0].starts_with("[FATAL]"));
        assert!(lines.len() >= 2);
        assert!(lines[1].contains("denied"));
    }
}
