//! Business logic services for the application layer.

pub mod registry;

pub use registry::{UrlRegistry, UrlStats};
