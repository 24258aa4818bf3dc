use std::path::Path;

/// Trait for reporting scan progress.
///
/// The CLI implements it with an indicatif spinner; tests and library
/// callers use [`SilentReporter`]. All methods default to no-ops.
pub trait ScanReporter {
    fn on_scan_start(&self, _root: &Path, _recursive: bool) {}
    fn on_scan_progress(&self, _files_found: usize, _current_path: &Path) {}
    fn on_scan_complete(&self, _root: &Path, _total_files: usize, _duration_secs: f64) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ScanReporter for SilentReporter {}
