//! # Tracker Page Route
//!
//! `GET /` — runs the fetch → normalize → aggregate pipeline and renders
//! the page. The requested hostname's leftmost label identifies the
//! viewer's country (`uk.stuckinsi.de` → United Kingdom); an unresolvable
//! label falls back to the generic page with no highlight. Feed failures
//! render a user-visible error page with 502 rather than crashing the
//! request.

use axum::extract::{Host, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use stuckinside_core::{aggregate, country, normalize, LatestMode};

use crate::render;
use crate::state::AppState;

/// Assemble the page router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_page))
}

/// The leftmost dot-separated label of a Host header, with any port
/// stripped. `us.stuckinsi.de` → `us`; `localhost:8080` → `localhost`.
pub(crate) fn viewer_label(host: &str) -> Option<&str> {
    let host = host.split(':').next()?;
    let label = host.split('.').next()?;
    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

async fn get_page(State(state): State<AppState>, Host(host): Host) -> Response {
    let raw = match state.feed.fetch_records().await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(error = %e, "feed fetch failed, rendering error page");
            return (
                StatusCode::BAD_GATEWAY,
                Html(render::error_page(&e.to_string())),
            )
                .into_response();
        }
    };

    let summaries = aggregate(&normalize(raw), LatestMode::default());

    let viewer = viewer_label(&host).and_then(country::by_internet);
    let current = viewer.and_then(|c| summaries.iter().find(|s| s.code == c.internet));

    let today = chrono::Local::now().date_naive();
    Html(render::page(
        &summaries,
        current,
        today,
        &state.config.site_domain,
    ))
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_label_plain_subdomain() {
        assert_eq!(viewer_label("us.stuckinsi.de"), Some("us"));
        assert_eq!(viewer_label("GB.stuckinsi.de"), Some("GB"));
    }

    #[test]
    fn test_viewer_label_strips_port() {
        assert_eq!(viewer_label("localhost:8080"), Some("localhost"));
        assert_eq!(viewer_label("uk.stuckinsi.de:443"), Some("uk"));
    }

    #[test]
    fn test_viewer_label_empty_host() {
        assert_eq!(viewer_label(""), None);
        assert_eq!(viewer_label(".stuckinsi.de"), None);
    }

    #[test]
    fn test_viewer_label_resolution_is_case_insensitive() {
        let c = viewer_label("UK.stuckinsi.de").and_then(country::by_internet);
        assert_eq!(c.unwrap().iso3, "GBR");
    }

    #[test]
    fn test_unresolvable_label_yields_no_country() {
        assert!(viewer_label("localhost:8080")
            .and_then(country::by_internet)
            .is_none());
        assert!(viewer_label("www.stuckinsi.de")
            .and_then(country::by_internet)
            .is_none());
    }
}
