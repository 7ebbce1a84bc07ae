//! # Country Summaries JSON Route
//!
//! `GET /v1/countries` — the CountrySummary sequence as JSON, plus the
//! viewer's own entry when the Host label resolves. `?compat=global`
//! selects the bug-compatible feed-wide `latest` selection.

use axum::extract::{Host, Query, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};

use stuckinside_core::{aggregate, country, normalize, CountrySummary, LatestMode};

use crate::error::AppError;
use crate::state::AppState;

/// Assemble the JSON API router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/countries", get(list_countries))
}

/// Query parameters for `GET /v1/countries`.
#[derive(Debug, Deserialize)]
pub struct CountriesQuery {
    /// `global` selects the original feed-wide `latest` selection.
    #[serde(default)]
    pub compat: Option<String>,
}

/// Response body for `GET /v1/countries`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountriesResponse {
    /// One summary per country, in feed first-occurrence order.
    pub countries: Vec<CountrySummary>,
    /// The viewer's own summary, when the Host label resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<CountrySummary>,
}

async fn list_countries(
    State(state): State<AppState>,
    Host(host): Host,
    Query(query): Query<CountriesQuery>,
) -> Result<Json<CountriesResponse>, AppError> {
    let mode = match query.compat.as_deref() {
        Some("global") => LatestMode::GlobalFirstOpen,
        _ => LatestMode::PerCountry,
    };

    let raw = state.feed.fetch_records().await?;
    let countries = aggregate(&normalize(raw), mode);

    let current = super::page::viewer_label(&host)
        .and_then(country::by_internet)
        .and_then(|c| countries.iter().find(|s| s.code == c.internet).cloned());

    Ok(Json(CountriesResponse { countries, current }))
}
