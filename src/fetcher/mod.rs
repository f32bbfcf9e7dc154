//! HTTP fetch capability
//!
//! The download engine never talks to a concrete HTTP client. It consumes the
//! narrow [`Fetcher`] capability: perform one GET, hand back the status and
//! the body as a stream of byte chunks. Production code plugs in
//! [`HttpFetcher`]; tests substitute deterministic implementations.

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::Stream;
use std::pin::Pin;

pub mod http;

pub use http::HttpFetcher;

/// Fetcher errors
#[derive(Debug, thiserror::Error)]
pub enum FetcherError {
    /// The request failed before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The response body broke off mid-stream.
    #[error("body error: {0}")]
    Body(String),
}

/// Result type for fetcher operations
pub type FetcherResult<T> = Result<T, FetcherError>;

/// Response body as a stream of byte chunks.
pub type BodyStream = Pin<Box<dyn Stream<Item = FetcherResult<Bytes>> + Send>>;

/// A response ready for streaming to disk.
pub struct FetchResponse {
    /// HTTP status code.
    pub status: u16,
    /// Body chunks, yielded in order.
    pub body: BodyStream,
}

impl FetchResponse {
    /// Whether the status is in the 2xx success range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability to GET one URL and stream the response body.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Issue a GET for `url`.
    ///
    /// An `Err` means no response arrived at all; HTTP-level failures come
    /// back as an `Ok` response carrying the non-2xx status.
    async fn fetch(&self, url: &str) -> FetcherResult<FetchResponse>;
}
