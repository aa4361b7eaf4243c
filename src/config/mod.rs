//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `NANG_BOT` prefix and nested values use double underscores as separators.
//!
//! The bare variables `LINE_CHANNEL_SECRET`, `LINE_CHANNEL_TOKEN` and
//! `TMDB_API_KEY` are honored as defaults beneath the prefixed ones.
//!
//! # Example
//!
//! ```no_run
//! use nang_bot::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod catalog;
mod error;
mod line;
mod server;
mod session;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use line::LineConfig;
pub use server::{Environment, ServerConfig};
pub use session::SessionConfig;

use serde::Deserialize;

use server::MAX_TIMEOUT_SECS;

/// Bare environment variables mapped onto their config keys.
const LEGACY_ENV_KEYS: [(&str, &str); 3] = [
    ("LINE_CHANNEL_SECRET", "line.channel_secret"),
    ("LINE_CHANNEL_TOKEN", "line.channel_access_token"),
    ("TMDB_API_KEY", "catalog.api_key"),
];

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// LINE channel credentials and reply API
    #[serde(default)]
    pub line: LineConfig,

    /// Movie catalog (TMDB)
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Last-movie session store
    #[serde(default)]
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Seeds defaults from the bare LINE/TMDB variables
    /// 3. Reads environment variables with `NANG_BOT` prefix
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `NANG_BOT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `NANG_BOT__SESSION__SCOPE=global` -> `session.scope = global`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    /// Missing credentials are caught later by [`AppConfig::validate()`].
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        for (var, key) in LEGACY_ENV_KEYS {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_default(key, value)?;
            }
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("NANG_BOT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid value found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.line.validate()?;
        self.catalog.validate()?;
        self.session.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

fn validate_url(field: &'static str, url: &str) -> Result<(), ValidationError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ValidationError::InvalidUrl(field))
    }
}

fn validate_timeout(field: &'static str, secs: u64) -> Result<(), ValidationError> {
    if secs == 0 || secs > MAX_TIMEOUT_SECS {
        return Err(ValidationError::InvalidTimeout(field));
    }
    Ok(())
}
