//! Key generator contract for short URL key allocation.

use crate::error::AppError;

/// Source of fresh short URL keys.
///
/// Implementations yield fixed-length alphanumeric keys, each handed out at
/// most once per generator instance. Uniqueness is local to the generator:
/// a returned key may still collide with one already registered, so the
/// registry re-checks every draw against its own index before use.
///
/// # Implementations
///
/// - [`crate::infrastructure::keygen::RandomKeyPool`] - pooled random generator
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait KeyGenerator: Send + Sync {
    /// Yields the next key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::KeyPoolExhausted`] if no key can be supplied.
    fn next_key(&mut self) -> Result<String, AppError>;
}
