//! Shared application state.

use std::sync::Arc;

use stuckinside_feed::FeedClient;

/// Application-level configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Domain used for per-country card links (`https://{code}.{domain}`).
    pub site_domain: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_domain: "stuckinsi.de".to_string(),
        }
    }
}

/// Shared state passed to all route handlers.
///
/// There is deliberately no cache and no store here: every request runs the
/// fetch → normalize → aggregate pipeline against the live feed, so
/// concurrent requests share nothing mutable.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Policy feed client, shared across handlers.
    pub feed: Arc<FeedClient>,
    /// Application configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Create application state around a feed client.
    pub fn new(feed: FeedClient, config: AppConfig) -> Self {
        Self {
            feed: Arc::new(feed),
            config,
        }
    }
}
