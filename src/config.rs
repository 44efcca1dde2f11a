//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `APP_HOST` - Bind host (default: `localhost`)
//! - `APP_PORT` - Bind port (default: `8080`)
//! - `SHORT_DOMAIN` - Domain embedded in issued short URLs, bare `host[:port]`
//!   form (default: `localhost:{APP_PORT}`)
//! - `KEY_POOL_SIZE` - Number of keys kept ready in the generator pool
//!   (default: 10, max: 10000)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Domain embedded in issued short URLs (`http://{domain}/{key}`).
    pub short_domain: String,
    /// Number of pre-generated keys the generator keeps ready.
    pub key_pool_size: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `APP_PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "localhost".to_string());

        let port: u16 = match env::var("APP_PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("APP_PORT must be a valid port number, got '{value}'"))?,
            Err(_) => 8080,
        };

        let short_domain =
            env::var("SHORT_DOMAIN").unwrap_or_else(|_| format!("localhost:{port}"));

        let key_pool_size = env::var("KEY_POOL_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            host,
            port,
            short_domain,
            key_pool_size,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `host` or `short_domain` is empty
    /// - `short_domain` carries a scheme instead of a bare `host[:port]`
    /// - `key_pool_size` is zero or larger than 10000
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            anyhow::bail!("APP_HOST must not be empty");
        }

        if self.short_domain.is_empty() {
            anyhow::bail!("SHORT_DOMAIN must not be empty");
        }

        if self.short_domain.contains("://") {
            anyhow::bail!(
                "SHORT_DOMAIN must be a bare host[:port], got '{}'",
                self.short_domain
            );
        }

        if self.key_pool_size == 0 {
            anyhow::bail!("KEY_POOL_SIZE must be at least 1");
        }

        if self.key_pool_size > 10_000 {
            anyhow::bail!(
                "KEY_POOL_SIZE is too large (max: 10000), got {}",
                self.key_pool_size
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Returns the address the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Short URL domain: {}", self.short_domain);
        tracing::info!("  Key pool size: {}", self.key_pool_size);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
