//! Handler for the access statistics endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::stats::{AccessInfo, StatsQuery, StatsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the full access history for a URL.
///
/// # Endpoint
///
/// `GET /stats?url={url}`
///
/// The `url` parameter accepts either form: the short URL or the original URL.
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:8080/aZ3k9QxB",
///   "total": 2,
///   "accesses": [
///     {
///       "ip": "203.0.113.7",
///       "user_agent": "curl/8.5.0",
///       "timestamp": "2024-01-15T09:30:00Z"
///     }
///   ]
/// }
/// ```
///
/// Accesses are listed in the order they happened.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is unknown or has never been accessed.
pub async fn stats_handler(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.registry.stats(&query.url)?;

    let accesses: Vec<AccessInfo> = stats
        .accesses
        .into_iter()
        .map(|record| AccessInfo {
            ip: record.ip,
            user_agent: record.user_agent,
            timestamp: record.timestamp,
        })
        .collect();

    Ok(Json(StatsResponse {
        short_url: stats.short_url,
        total: accesses.len(),
        accesses,
    }))
}
