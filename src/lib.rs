//! # tinylink
//!
//! An in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and the key generator trait
//! - **Application Layer** ([`application`]) - The URL registry holding all business logic
//! - **Infrastructure Layer** ([`infrastructure`]) - Pooled random key generation
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Pool-based key allocation with collision retry
//! - Lookup by short URL or original URL for statistics and toggling
//! - Per-access audit log (client IP, user agent, timestamp)
//! - Enable/disable switch per short URL
//!
//! All state lives in process memory; restarting the service starts from an
//! empty registry.
//!
//! ## Quick Start
//!
//! ```bash
//! # All variables are optional
//! export APP_PORT=8080
//! export SHORT_DOMAIN="localhost:8080"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{UrlRegistry, UrlStats};
    pub use crate::domain::entities::{AccessRecord, ShortLink};
    pub use crate::error::AppError;
    pub use crate::infrastructure::keygen::RandomKeyPool;
    pub use crate::state::AppState;
}
