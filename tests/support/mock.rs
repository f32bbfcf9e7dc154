//! Deterministic doubles for the fetch capability and the observer

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bhav_dl::downloader::DownloadObserver;
use bhav_dl::fetcher::{FetchResponse, Fetcher, FetcherError, FetcherResult};
use bytes::Bytes;
use futures_util::stream;

/// One scripted reply for a URL.
#[derive(Clone)]
pub enum Reply {
    /// 200 response carrying this body.
    Body(Vec<u8>),
    /// Bodyless response with this status.
    Status(u16),
    /// Request-level failure; no response at all.
    ConnectError,
}

/// Fetcher that replays a per-URL script and counts how often each URL was
/// requested. The last reply of a script repeats once the script runs out,
/// so a single `Status(500)` entry models a permanently broken remote.
#[derive(Default)]
pub struct ScriptedFetcher {
    scripts: Mutex<HashMap<String, Vec<Reply>>>,
    hits: Mutex<HashMap<String, usize>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the replies for `url`, replayed in order.
    pub fn script(&self, url: &str, replies: Vec<Reply>) {
        assert!(!replies.is_empty(), "script for {url} must not be empty");
        self.scripts.lock().unwrap().insert(url.to_string(), replies);
    }

    /// How many times `url` was fetched.
    pub fn hits(&self, url: &str) -> usize {
        self.hits.lock().unwrap().get(url).copied().unwrap_or(0)
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, url: &str) -> FetcherResult<FetchResponse> {
        *self
            .hits
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_insert(0) += 1;

        let reply = {
            let mut scripts = self.scripts.lock().unwrap();
            let queue = scripts
                .get_mut(url)
                .unwrap_or_else(|| panic!("no script for {url}"));
            if queue.len() > 1 {
                queue.remove(0)
            } else {
                queue[0].clone()
            }
        };

        match reply {
            Reply::ConnectError => Err(FetcherError::Network("connection refused".into())),
            Reply::Status(code) => Ok(FetchResponse {
                status: code,
                body: Box::pin(stream::empty()),
            }),
            Reply::Body(bytes) => Ok(FetchResponse {
                status: 200,
                body: Box::pin(stream::once(async move { Ok(Bytes::from(bytes)) })),
            }),
        }
    }
}

/// Observer that records everything it is told.
#[derive(Default)]
pub struct RecordingObserver {
    pub started: Mutex<Vec<String>>,
    pub summaries: Mutex<Vec<(usize, usize, usize)>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DownloadObserver for RecordingObserver {
    fn task_started(&self, _index: usize, file_name: &str) {
        self.started.lock().unwrap().push(file_name.to_string());
    }

    fn summary(&self, total: usize, succeeded: usize, failed: usize) {
        self.summaries
            .lock()
            .unwrap()
            .push((total, succeeded, failed));
    }
}
