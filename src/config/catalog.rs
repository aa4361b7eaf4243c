//! Movie catalog configuration (TMDB)

use std::time::Duration;

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;
use super::{validate_timeout, validate_url};

/// TMDB catalog configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// TMDB v3 API key
    #[serde(default = "empty_secret")]
    pub api_key: Secret<String>,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Prefix joined with a movie's poster path
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Response locale
    #[serde(default = "default_language")]
    pub language: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("TMDB_API_KEY"));
        }
        validate_url("catalog.base_url", &self.base_url)?;
        validate_url("catalog.image_base_url", &self.image_base_url)?;
        validate_timeout("catalog.timeout_secs", self.timeout_secs)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: empty_secret(),
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            language: default_language(),
            timeout_secs: default_timeout(),
        }
    }
}

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_language() -> String {
    "th-TH".to_string()
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> CatalogConfig {
        CatalogConfig {
            api_key: Secret::new("tmdb-key".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.image_base_url, "https://image.tmdb.org/t/p/w500");
        assert_eq!(config.language, "th-TH");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_missing_api_key() {
        assert_eq!(
            CatalogConfig::default().validate(),
            Err(ValidationError::MissingRequired("TMDB_API_KEY"))
        );
    }

    #[test]
    fn test_timeout_bounds() {
        let config = CatalogConfig {
            timeout_secs: 0,
            ..configured()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidTimeout("catalog.timeout_secs"))
        );

        let config = CatalogConfig {
            timeout_secs: 301,
            ..configured()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_image_base_url_must_be_http() {
        let config = CatalogConfig {
            image_base_url: "image.tmdb.org".to_string(),
            ..configured()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidUrl("catalog.image_base_url"))
        );
    }
}
