//! reqwest-backed fetcher

use std::time::Duration;

use async_trait::async_trait;
use futures_util::{StreamExt, TryStreamExt};
use reqwest::Client;
use tracing::debug;

use crate::fetcher::{Fetcher, FetchResponse, FetcherError, FetcherResult};

/// Per-request timeout. Bhav copy files are small zip archives; anything
/// still in flight after this long is treated as a connection failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Production [`Fetcher`] backed by a shared [`reqwest::Client`].
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default client configuration.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }

    /// Create a fetcher around an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetcherResult<FetchResponse> {
        debug!(url, "issuing GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetcherError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes_stream()
            .map_err(|e| FetcherError::Body(e.to_string()))
            .boxed();

        Ok(FetchResponse { status, body })
    }
}
