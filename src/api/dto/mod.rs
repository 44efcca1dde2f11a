//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Validation
//! beyond shape happens in the application layer.

pub mod health;
pub mod shorten;
pub mod stats;
pub mod toggle;
