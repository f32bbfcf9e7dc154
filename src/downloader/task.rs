//! Download work units and their classified outcomes

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::downloader::config::NOT_FOUND_STATUS;

/// One unit of work: a remote URL plus the local file name to save it under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadTask {
    /// Remote fetch target.
    pub url: String,
    /// Suggested destination file name, relative to the output directory.
    pub file_name: String,
}

impl DownloadTask {
    /// Create a new task.
    pub fn new(url: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            file_name: file_name.into(),
        }
    }
}

/// Transport-level outcome of a fetch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStatus {
    /// The remote answered with this HTTP status.
    Http(u16),
    /// The request never produced a response (DNS, connect, broken body).
    ConnectionFailed,
}

impl FetchStatus {
    /// HTTP status code, when a response arrived at all.
    pub fn code(&self) -> Option<u16> {
        match self {
            FetchStatus::Http(code) => Some(*code),
            FetchStatus::ConnectionFailed => None,
        }
    }

    /// Whether the remote reported the file as permanently absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchStatus::Http(code) if *code == NOT_FOUND_STATUS)
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchStatus::Http(code) => write!(f, "{code}"),
            FetchStatus::ConnectionFailed => write!(f, "connection failed"),
        }
    }
}

/// Classified outcome of one [`DownloadTask`].
///
/// `local_path` is present exactly when the fetch succeeded and the body was
/// persisted; the two constructors are the only way to build a result, so the
/// invariant holds everywhere downstream.
#[derive(Debug, Clone, Serialize)]
pub struct DownloadResult {
    /// Remote URL the task pointed at.
    pub url: String,
    /// Suggested file name carried over from the task.
    pub file_name: String,
    /// Absolute path of the written file, for successful fetches only.
    pub local_path: Option<PathBuf>,
    /// Transport outcome backing the classification.
    pub status: FetchStatus,
}

impl DownloadResult {
    /// Build a success result for `task`, persisted at `local_path`.
    pub fn success(task: &DownloadTask, local_path: PathBuf, status: FetchStatus) -> Self {
        Self {
            url: task.url.clone(),
            file_name: task.file_name.clone(),
            local_path: Some(local_path),
            status,
        }
    }

    /// Build a failure result for `task`.
    pub fn failure(task: &DownloadTask, status: FetchStatus) -> Self {
        Self {
            url: task.url.clone(),
            file_name: task.file_name.clone(),
            local_path: None,
            status,
        }
    }

    /// Whether the fetch succeeded and bytes were persisted.
    pub fn is_success(&self) -> bool {
        self.local_path.is_some()
    }

    /// Reconstruct a fresh task from this result, for re-submission.
    pub fn to_task(&self) -> DownloadTask {
        DownloadTask::new(&self.url, &self.file_name)
    }
}
