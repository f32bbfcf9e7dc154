//! Download orchestration
//!
//! The engine behind the CLI: a [`Source`](crate::source::Source) turns a
//! date range into tasks, [`retry::RetryOrchestrator`] drives
//! [`executor::FetchExecutor`] over them in bounded passes, and
//! [`backoff::Backoff`] keeps the request cadence polite. Execution is
//! strictly sequential; that is a politeness decision toward a remote that
//! rejects bursty traffic, not an accident of implementation.
//!
//! Per-task problems never surface as errors; they are folded into
//! [`task::DownloadResult`] so the orchestrator can partition and retry.
//! Only local conditions the classification scheme cannot meaningfully
//! recover from — an unusable destination, failed writes — escape as
//! [`DownloadError`].

pub mod backoff;
pub mod config;
pub mod executor;
pub mod progress;
pub mod retry;
pub mod task;

pub use backoff::Backoff;
pub use executor::FetchExecutor;
pub use progress::{ConsoleObserver, DownloadObserver, SilentObserver};
pub use retry::{DownloadReport, RetryOrchestrator};
pub use task::{DownloadResult, DownloadTask, FetchStatus};

use std::path::PathBuf;

/// Download errors
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// Destination directory missing or not resolvable.
    #[error("destination directory {path:?} is not usable: {source}")]
    Destination {
        /// Directory as supplied by the caller.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Local I/O failure while persisting a body.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
