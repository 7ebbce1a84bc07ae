//! The feed client.

use std::time::Duration;

use stuckinside_core::RawRecord;

use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::retry::with_retry;

/// HTTP client for the aggregated policy feed.
///
/// Wraps a [`reqwest::Client`] with the configured per-request timeout.
/// Cheap to clone; designed to be shared via `Arc` across request handlers.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    url: String,
}

impl FeedClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Config`] when the URL does not parse, and
    /// [`FeedError::Http`] when the underlying HTTP client cannot be built.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|source| FeedError::Http {
                endpoint: config.url.clone(),
                source,
            })?;
        Ok(Self {
            client,
            url: config.url,
        })
    }

    /// The configured feed URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the feed and decode it as a JSON array of [`RawRecord`].
    ///
    /// Transport failures are retried with backoff; a non-2xx response or a
    /// body that is not a record array fails immediately.
    pub async fn fetch_records(&self) -> Result<Vec<RawRecord>, FeedError> {
        let resp = with_retry(|| self.client.get(&self.url).send())
            .await
            .map_err(|source| FeedError::Http {
                endpoint: self.url.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                endpoint: self.url.clone(),
                status: status.as_u16(),
                body,
            });
        }

        let records: Vec<RawRecord> =
            resp.json().await.map_err(|source| FeedError::Parse {
                endpoint: self.url.clone(),
                source,
            })?;

        tracing::debug!(count = records.len(), "fetched policy feed");
        Ok(records)
    }
}
