//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten one long URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten (must start with `http://` or `https://`).
    pub original_url: String,
}

/// Response containing the issued short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
