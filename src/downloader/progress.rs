//! Progress reporting
//!
//! The engine reports through the [`DownloadObserver`] interface instead of
//! writing to the console itself, so library callers and tests can capture
//! progress without scraping process output. [`ConsoleObserver`] is the
//! binary's implementation: a transient per-task line plus the final
//! one-line summary.

use indicatif::{ProgressBar, ProgressStyle};

/// Receives per-task progress and the end-of-run summary.
pub trait DownloadObserver: Send + Sync {
    /// A task is about to be fetched. `index` counts from 0 within the
    /// current pass.
    fn task_started(&self, index: usize, file_name: &str);

    /// The whole run finished. `total` is the original task count;
    /// `succeeded + failed == total`.
    fn summary(&self, total: usize, succeeded: usize, failed: usize);
}

/// Render the end-of-run summary line.
pub fn format_summary(total: usize, succeeded: usize, failed: usize) -> String {
    format!("Downloaded {total} files, {succeeded} success, {failed} failed")
}

/// Console reporter: transient spinner line per task, printed summary.
pub struct ConsoleObserver {
    bar: ProgressBar,
}

impl ConsoleObserver {
    /// Create a reporter drawing to stderr.
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(ProgressStyle::with_template("{msg}").unwrap());
        Self { bar }
    }
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadObserver for ConsoleObserver {
    fn task_started(&self, index: usize, file_name: &str) {
        self.bar.set_message(format!("Processing file {index}:{file_name}"));
    }

    fn summary(&self, total: usize, succeeded: usize, failed: usize) {
        self.bar.finish_and_clear();
        println!("{}", format_summary(total, succeeded, failed));
    }
}

/// Observer that reports nothing. Used when the caller renders the report
/// itself, e.g. for JSON output.
pub struct SilentObserver;

impl DownloadObserver for SilentObserver {
    fn task_started(&self, _index: usize, _file_name: &str) {}

    fn summary(&self, _total: usize, _succeeded: usize, _failed: usize) {}
}
