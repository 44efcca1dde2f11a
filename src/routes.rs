//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /url`      - Create a short URL
//! - `GET  /stats`    - Access history for a URL (`?url=` short or original form)
//! - `POST /enable`   - Re-enable a short URL
//! - `POST /disable`  - Disable a short URL
//! - `GET  /health`   - Health check with registry counters
//! - `GET  /{key}`    - Short URL redirect
//!
//! Static paths are registered alongside the `{key}` capture; the router
//! matches them first, so keys shadowing an endpoint name cannot occur.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::{
    Router,
    routing::{get, post},
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{
    disable_handler, enable_handler, health_handler, redirect_handler, shorten_handler,
    stats_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/url", post(shorten_handler))
        .route("/stats", get(stats_handler))
        .route("/enable", post(enable_handler))
        .route("/disable", post(disable_handler))
        .route("/health", get(health_handler))
        .route("/{key}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
