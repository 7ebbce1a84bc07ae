//! Feed client error types.

/// Errors from fetching and decoding the policy feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP transport error (connection failure, timeout) after retries.
    #[error("HTTP error fetching {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The feed returned a non-2xx status.
    #[error("feed {endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// The body was not a JSON array of policy records.
    #[error("failed to decode feed body from {endpoint}: {source}")]
    Parse {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}
