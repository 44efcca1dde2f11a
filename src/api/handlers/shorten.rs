//! Handler for the shorten endpoint.

use axum::{Json, extract::State};
use tracing::info;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for one long URL.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "http://localhost:8080/aZ3k9QxB" }
/// ```
///
/// Shortening a URL that already has a short URL returns the existing one.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL does not start with `http://` or `https://`.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let short_url = state.registry.shorten(&payload.original_url)?;

    info!(original_url = %payload.original_url, %short_url, "Shortened URL");

    Ok(Json(ShortenResponse { short_url }))
}
