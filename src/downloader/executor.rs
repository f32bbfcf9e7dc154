//! Sequential batch executor
//!
//! Runs one pass over a batch of tasks: one GET at a time through the
//! injected [`Fetcher`], body streamed straight to disk, every task
//! classified into exactly one [`DownloadResult`]. The executor owns a fresh
//! [`Backoff`] for the pass and consults it around each request; requests
//! are never pipelined or overlapped, which is what keeps the throttle
//! state meaningful.

use std::path::Path;

use futures_util::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::downloader::backoff::Backoff;
use crate::downloader::config::{BACKOFF_BASE, BACKOFF_CEILING, RATE_LIMIT_STATUS};
use crate::downloader::progress::DownloadObserver;
use crate::downloader::task::{DownloadResult, DownloadTask, FetchStatus};
use crate::downloader::DownloadError;
use crate::fetcher::{FetchResponse, Fetcher};

/// One-pass executor over a task batch.
pub struct FetchExecutor<'a> {
    fetcher: &'a dyn Fetcher,
    observer: &'a dyn DownloadObserver,
    backoff: Backoff,
    rate_limit_status: u16,
}

impl<'a> FetchExecutor<'a> {
    /// Create an executor with the default throttle and rate-limit status.
    pub fn new(fetcher: &'a dyn Fetcher, observer: &'a dyn DownloadObserver) -> Self {
        Self {
            fetcher,
            observer,
            backoff: Backoff::new(BACKOFF_BASE, BACKOFF_CEILING),
            rate_limit_status: RATE_LIMIT_STATUS,
        }
    }

    /// Replace the throttle for this pass.
    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    /// Status the provider uses to signal rate limiting.
    pub fn with_rate_limit_status(mut self, status: u16) -> Self {
        self.rate_limit_status = status;
        self
    }

    /// Fetch every task in order, writing successful bodies under
    /// `dest_dir`.
    ///
    /// Per-task outcomes never escape as errors; each task produces exactly
    /// one result. Only local problems — an unusable destination directory,
    /// a failed file write — propagate, aborting the pass.
    pub async fn run(
        &mut self,
        tasks: &[DownloadTask],
        dest_dir: &Path,
    ) -> Result<Vec<DownloadResult>, DownloadError> {
        let dest_dir = dest_dir
            .canonicalize()
            .map_err(|source| DownloadError::Destination {
                path: dest_dir.to_path_buf(),
                source,
            })?;

        let mut results = Vec::with_capacity(tasks.len());
        for (index, task) in tasks.iter().enumerate() {
            self.observer.task_started(index, &task.file_name);
            results.push(self.fetch_one(task, &dest_dir).await?);
        }
        Ok(results)
    }

    async fn fetch_one(
        &mut self,
        task: &DownloadTask,
        dest_dir: &Path,
    ) -> Result<DownloadResult, DownloadError> {
        let response = match self.fetcher.fetch(&task.url).await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %task.url, error = %e, "request failed without a response");
                return Ok(DownloadResult::failure(task, FetchStatus::ConnectionFailed));
            }
        };

        if !response.ok() {
            warn!(url = %task.url, status = response.status, "download failed");
            let result = DownloadResult::failure(task, FetchStatus::Http(response.status));
            if response.status == self.rate_limit_status {
                self.backoff.backoff().await;
            }
            return Ok(result);
        }

        let status = FetchStatus::Http(response.status);
        let path = dest_dir.join(&task.file_name);
        if !self.write_body(response, &path).await? {
            return Ok(DownloadResult::failure(task, FetchStatus::ConnectionFailed));
        }

        debug!(path = %path.display(), "saved");
        let result = DownloadResult::success(task, path, status);
        self.backoff.wait().await;
        Ok(result)
    }

    /// Stream the body to `path`, truncating any existing file.
    ///
    /// Returns `Ok(false)` when the body broke off mid-stream; the partial
    /// file is left behind and overwritten by a later attempt. Write errors
    /// are local problems and propagate.
    async fn write_body(
        &self,
        response: FetchResponse,
        path: &Path,
    ) -> Result<bool, DownloadError> {
        let mut file = File::create(path).await?;
        let mut body = response.body;
        while let Some(chunk) = body.next().await {
            match chunk {
                Ok(bytes) => file.write_all(&bytes).await?,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "body ended early");
                    return Ok(false);
                }
            }
        }
        file.flush().await?;
        Ok(true)
    }
}
