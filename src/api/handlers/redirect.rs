//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use chrono::Utc;
use std::net::SocketAddr;
use tracing::debug;

use crate::domain::entities::AccessRecord;
use crate::error::AppError;
use crate::state::AppState;

/// User agent recorded when the client sends no `User-Agent` header.
const UNKNOWN_USER_AGENT: &str = "Not provided";

/// Redirects a short URL key to its original URL.
///
/// # Endpoint
///
/// `GET /{key}`
///
/// # Request Flow
///
/// 1. Assemble the access record from client IP, user agent, and current time
/// 2. Resolve the key and append the record to the URL's access log
/// 3. Return 307 Temporary Redirect to the original URL
///
/// Every successful redirect is recorded; there is no sampling.
///
/// # Errors
///
/// Returns 400 Bad Request if no short URL exists for the key.
/// Returns 404 Not Found if the short URL has been disabled.
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(UNKNOWN_USER_AGENT);

    let record = AccessRecord::new(addr.ip().to_string(), user_agent.to_string(), Utc::now());

    let original_url = state.registry.access(&key, record)?;

    debug!(%key, %original_url, "Redirecting");

    Ok(Redirect::temporary(&original_url))
}
