//! # Bhav Copy Downloader Library
//!
//! Bulk-downloads dated end-of-day market data files ("bhav copies") over
//! HTTP into a local directory, tolerating transient failures without
//! hammering the remote server.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bhav_dl::downloader::{ConsoleObserver, RetryOrchestrator};
//! use bhav_dl::fetcher::HttpFetcher;
//! use bhav_dl::source::{BseEquitySource, Source};
//! use chrono::NaiveDate;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let start = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2016, 2, 1).unwrap();
//! let tasks: Vec<_> = BseEquitySource::new().tasks_for_range(start, end).collect();
//!
//! let fetcher = HttpFetcher::new();
//! let observer = ConsoleObserver::new();
//! let report = RetryOrchestrator::new(&fetcher, &observer)
//!     .download(tasks, "./data".as_ref())
//!     .await?;
//! println!("{} files now on disk", report.successes.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`source`] - turns a date range into download tasks, one per trading
//!   day (weekends skipped), or one per range for range-granular providers
//! - [`fetcher`] - the narrow HTTP capability the engine consumes
//! - [`downloader`] - sequential execution, adaptive throttling, bounded
//!   retries and result partitioning
//! - [`cli`] - the command-line surface
//!
//! Execution is deliberately sequential with one request in flight at a
//! time; failed tasks are retried in later passes, except files the remote
//! reports as permanently missing.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// CLI command implementations
pub mod cli;

/// Download orchestration
pub mod downloader;

/// HTTP fetch capability
pub mod fetcher;

/// Task sources
pub mod source;

pub use downloader::{DownloadReport, DownloadResult, DownloadTask, FetchStatus};
