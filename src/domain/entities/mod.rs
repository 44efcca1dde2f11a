//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the
//! core concepts of the URL shortening service. Entities are plain data
//! structures without business logic.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - A shortened URL mapping with its enabled flag
//! - [`AccessRecord`] - Audit metadata for one access of a short URL
//!
//! Both are immutable value types: the registry replaces records instead of
//! mutating them in place.

pub mod access_record;
pub mod short_link;

pub use access_record::AccessRecord;
pub use short_link::ShortLink;
