//! Pooled random key generation.
//!
//! Stands in for what a dedicated key-allocation service would provide,
//! backed by an in-memory pool of pre-generated keys.

use std::collections::HashSet;

use rand::{Rng, distr::Alphanumeric};
use serde_json::json;

use crate::domain::keygen::KeyGenerator;
use crate::error::AppError;

/// Number of characters in a generated key (62^8 possible keys).
const KEY_LENGTH: usize = 8;

/// Default number of keys kept ready in the pool.
pub const DEFAULT_POOL_SIZE: usize = 10;

/// Pool-based random key generator.
///
/// Holds `pool_size` distinct pre-generated keys and replenishes the pool on
/// every draw, so each draw is served from keys already vetted against each
/// other. Collisions are only checked within the pool, not against keys
/// issued earlier; the registry performs that check.
///
/// # Examples
///
/// ```ignore
/// let mut pool = RandomKeyPool::default();
/// let key = pool.next_key()?;
/// assert_eq!(key.len(), 8);
/// assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub struct RandomKeyPool {
    pool: HashSet<String>,
    pool_size: usize,
}

impl RandomKeyPool {
    /// Creates a generator with `pool_size` keys generated eagerly.
    pub fn new(pool_size: usize) -> Self {
        let mut pool = HashSet::with_capacity(pool_size);
        while pool.len() < pool_size {
            pool.insert(random_key());
        }

        Self { pool, pool_size }
    }
}

impl Default for RandomKeyPool {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SIZE)
    }
}

impl KeyGenerator for RandomKeyPool {
    fn next_key(&mut self) -> Result<String, AppError> {
        let key = self
            .pool
            .iter()
            .next()
            .cloned()
            .ok_or_else(|| {
                AppError::pool_exhausted(
                    "Key pool is empty",
                    json!({ "pool_size": self.pool_size }),
                )
            })?;
        self.pool.remove(&key);

        // Resample on collision so the pool returns to pool_size distinct keys.
        loop {
            if self.pool.insert(random_key()) {
                break;
            }
        }

        Ok(key)
    }
}

/// Samples one key of [`KEY_LENGTH`] characters from `a-z`, `A-Z`, `0-9`.
fn random_key() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(KEY_LENGTH)
        .map(char::from)
        .collect()
}
