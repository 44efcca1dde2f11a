//! DTOs for the enable and disable endpoints.

use serde::{Deserialize, Serialize};

/// Request naming the URL whose enabled flag should change.
#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    /// The URL to toggle, in either form: short URL or original URL.
    pub url: String,
}

/// Response containing the short URL whose flag changed.
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub short_url: String,
}
