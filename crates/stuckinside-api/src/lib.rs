//! # stuckinside-api — Axum Application
//!
//! The serving layer for the Stuck Inside lockdown tracker, built on
//! Axum/Tower/Tokio.
//!
//! ## API Surface
//!
//! | Route                | Module                  | Purpose                         |
//! |----------------------|-------------------------|---------------------------------|
//! | `GET /`              | [`routes::page`]        | Server-rendered tracker page    |
//! | `GET /v1/countries`  | [`routes::countries`]   | Country summaries as JSON       |
//! | `GET /health/*`      | (here)                  | Liveness / readiness probes     |
//!
//! ## Architecture
//!
//! Handlers hold no business logic: they run the pipeline from
//! `stuckinside-feed` and `stuckinside-core` and hand the result to
//! [`render`] or serde. Every request builds its data fresh from the live
//! feed — there is no cache and no shared mutable state.

pub mod error;
pub mod render;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::page::router())
        .merge(routes::countries::router())
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Liveness probe — 200 whenever the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — liveness plus configuration sanity.
///
/// The feed URL was validated when the client was built, so this only
/// re-checks that the configured endpoint still parses. The feed itself is
/// deliberately not probed: a flapping upstream should degrade page loads
/// to the error view, not take the whole service out of rotation.
async fn readiness(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> (axum::http::StatusCode, &'static str) {
    if url::Url::parse(state.feed.url()).is_err() {
        return (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            "feed url invalid",
        );
    }
    (axum::http::StatusCode::OK, "ready")
}
