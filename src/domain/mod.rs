//! Domain layer containing business entities and contracts.
//!
//! This module defines the data structures and interfaces at the core of the
//! service, independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`keygen`] - Key generation trait definition
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The [`keygen::KeyGenerator`] trait is the contract implemented by the
//!   infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod keygen;
