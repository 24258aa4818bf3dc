use dir_report_core::ScanReporter;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::cell::RefCell;
use std::path::Path;
use std::time::Duration;

/// Spinner on stderr while a root is being scanned.
pub struct CliReporter {
    bar: RefCell<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: RefCell::new(None),
        }
    }

    fn finish_bar(&self) {
        if let Some(pb) = self.bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl ScanReporter for CliReporter {
    fn on_scan_start(&self, root: &Path, recursive: bool) {
        self.finish_bar();

        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        pb.set_message(format!(
            "Scanning {}{}...",
            root.display(),
            if recursive { " (recursive)" } else { "" }
        ));
        pb.enable_steady_tick(Duration::from_millis(80));
        *self.bar.borrow_mut() = Some(pb);
    }

    fn on_scan_progress(&self, files_found: usize, _current_path: &Path) {
        if let Some(pb) = self.bar.borrow().as_ref() {
            pb.set_message(format!("Scanning... {} files found", files_found));
        }
    }

    fn on_scan_complete(&self, root: &Path, total_files: usize, duration_secs: f64) {
        self.finish_bar();
        eprintln!(
            "  \x1b[32m✓\x1b[0m Scanned {}: {} files in {:.2}s",
            root.display(),
            total_files,
            duration_secs
        );
    }
}

impl Drop for CliReporter {
    fn drop(&mut self) {
        self.finish_bar();
    }
}
