//! Infrastructure layer for concrete implementations of domain contracts.
//!
//! # Modules
//!
//! - [`keygen`] - Pool-based random key generation

pub mod keygen;
