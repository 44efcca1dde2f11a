//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations: validation, key allocation,
//! index bookkeeping, and access auditing. Services consume domain traits
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::registry::UrlRegistry`] - Shortening, redirects, toggles, statistics

pub mod services;
