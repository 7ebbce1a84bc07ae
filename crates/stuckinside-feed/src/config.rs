//! Feed client configuration.

/// The public aggregated policy feed.
pub const DEFAULT_FEED_URL: &str =
    "https://app.workbenchdata.com/public/moduledata/live/353395.json";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`FeedClient`](crate::FeedClient).
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Feed endpoint URL.
    pub url: String,
    /// Per-request timeout in seconds (default: 30).
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Configuration for a non-default feed URL with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Validate the configured URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.url).map_err(|source| ConfigError::InvalidUrl {
            url: self.url.clone(),
            source,
        })?;
        Ok(())
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL)
    }
}

/// Feed configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configured feed URL does not parse.
    #[error("invalid feed URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
}
