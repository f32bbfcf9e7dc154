//! Bounded-retry orchestration
//!
//! Drives [`FetchExecutor`] over a batch in up to [`MAX_PASSES`] passes.
//! After each pass the results are partitioned into successes and failures;
//! failures whose status is not the permanent "not found" code are
//! reconstructed as fresh tasks and re-submitted. Each pass gets its own
//! [`Backoff`], so throttle state never leaks between passes.

use std::path::Path;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::downloader::backoff::Backoff;
use crate::downloader::config::{BACKOFF_BASE, BACKOFF_CEILING, MAX_PASSES, RATE_LIMIT_STATUS};
use crate::downloader::executor::FetchExecutor;
use crate::downloader::progress::DownloadObserver;
use crate::downloader::task::{DownloadResult, DownloadTask};
use crate::downloader::DownloadError;
use crate::fetcher::Fetcher;

/// Final partition of a batch: every original task appears exactly once,
/// in `fails` or in `successes`, carrying its most recent result.
#[derive(Debug, Default, Serialize)]
pub struct DownloadReport {
    /// Tasks that never produced a persisted file.
    pub fails: Vec<DownloadResult>,
    /// Tasks whose bytes are on disk.
    pub successes: Vec<DownloadResult>,
}

/// Multi-pass download driver.
pub struct RetryOrchestrator<'a> {
    fetcher: &'a dyn Fetcher,
    observer: &'a dyn DownloadObserver,
    max_passes: u32,
    rate_limit_status: u16,
    backoff_base: Duration,
    backoff_ceiling: Duration,
}

impl<'a> RetryOrchestrator<'a> {
    /// Create an orchestrator with the default pass budget and throttle.
    pub fn new(fetcher: &'a dyn Fetcher, observer: &'a dyn DownloadObserver) -> Self {
        Self {
            fetcher,
            observer,
            max_passes: MAX_PASSES,
            rate_limit_status: RATE_LIMIT_STATUS,
            backoff_base: BACKOFF_BASE,
            backoff_ceiling: BACKOFF_CEILING,
        }
    }

    /// Total pass budget, counting the initial pass. Must be at least 1.
    pub fn with_max_passes(mut self, max_passes: u32) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    /// Status the provider uses to signal rate limiting.
    pub fn with_rate_limit_status(mut self, status: u16) -> Self {
        self.rate_limit_status = status;
        self
    }

    /// Throttle parameters handed to each pass.
    pub fn with_backoff(mut self, base: Duration, ceiling: Duration) -> Self {
        self.backoff_base = base;
        self.backoff_ceiling = ceiling;
        self
    }

    /// Download every task into `dest_dir`, retrying transient failures.
    ///
    /// "Not found" failures are permanent and are never re-submitted; all
    /// other failures are retried until the pass budget runs out. The
    /// observer receives one summary covering the original batch.
    pub async fn download(
        &self,
        tasks: Vec<DownloadTask>,
        dest_dir: &Path,
    ) -> Result<DownloadReport, DownloadError> {
        let total = tasks.len();
        let mut report = DownloadReport::default();
        let mut worklist = tasks;

        for attempt in 1..=self.max_passes {
            if worklist.is_empty() {
                break;
            }
            debug!(attempt, pending = worklist.len(), "starting pass");

            let mut executor = FetchExecutor::new(self.fetcher, self.observer)
                .with_rate_limit_status(self.rate_limit_status)
                .with_backoff(Backoff::new(self.backoff_base, self.backoff_ceiling));
            let results = executor.run(&worklist, dest_dir).await?;

            let (successes, fails): (Vec<_>, Vec<_>) =
                results.into_iter().partition(DownloadResult::is_success);
            report.successes.extend(successes);

            let (retryable, permanent): (Vec<_>, Vec<_>) = fails
                .into_iter()
                .partition(|result| !result.status.is_not_found());
            report.fails.extend(permanent);

            if attempt == self.max_passes {
                if !retryable.is_empty() {
                    info!(failures = retryable.len(), "giving up");
                }
                report.fails.extend(retryable);
                worklist = Vec::new();
            } else {
                worklist = retryable.iter().map(DownloadResult::to_task).collect();
            }
        }

        self.observer
            .summary(total, report.successes.len(), report.fails.len());
        Ok(report)
    }
}
