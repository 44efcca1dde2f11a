//! DTOs for the access statistics endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters for the stats endpoint.
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    /// The URL to look up, in either form: short URL or original URL.
    pub url: String,
}

/// Access history for one short URL.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_url: String,
    pub total: usize,
    pub accesses: Vec<AccessInfo>,
}

/// A single recorded access.
#[derive(Debug, Serialize)]
pub struct AccessInfo {
    pub ip: String,
    pub user_agent: String,
    pub timestamp: DateTime<Utc>,
}
