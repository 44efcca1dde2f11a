//! Handlers for enabling and disabling short URLs.

use axum::{Json, extract::State};
use tracing::info;

use crate::api::dto::toggle::{ToggleRequest, ToggleResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Re-enables redirects for a short URL.
///
/// # Endpoint
///
/// `POST /enable`
///
/// # Request Body
///
/// ```json
/// { "url": "http://localhost:8080/aZ3k9QxB" }
/// ```
///
/// The `url` field accepts either form: the short URL or the original URL.
/// Enabling an already enabled URL succeeds and changes nothing.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is unknown.
pub async fn enable_handler(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let short_url = state.registry.enable(&payload.url)?;

    info!(url = %payload.url, %short_url, "Enabled short URL");

    Ok(Json(ToggleResponse { short_url }))
}

/// Disables redirects for a short URL until it is re-enabled.
///
/// # Endpoint
///
/// `POST /disable`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// The `url` field accepts either form: the short URL or the original URL.
/// Redirects fail with 404 while disabled; statistics stay queryable.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is unknown.
pub async fn disable_handler(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let short_url = state.registry.disable(&payload.url)?;

    info!(url = %payload.url, %short_url, "Disabled short URL");

    Ok(Json(ToggleResponse { short_url }))
}
