//! HTTP client for fetching the raw catalog feed text.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::FeedError;

/// HTTP client for the catalog feed.
///
/// Maps not-found (404) and other non-2xx responses to typed errors so the
/// caller can distinguish a missing feed from a transient upstream failure.
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Creates a `FeedClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the feed body as text.
    ///
    /// # Errors
    ///
    /// - [`FeedError::NotFound`] — HTTP 404.
    /// - [`FeedError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`FeedError::Http`] — network or TLS failure, or a body read error.
    pub async fn fetch_feed(&self, url: &str) -> Result<String, FeedError> {
        tracing::debug!(url, "fetching catalog feed");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(FeedError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
