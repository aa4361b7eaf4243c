//! LINE Messaging API configuration

use std::time::Duration;

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;
use super::{validate_timeout, validate_url};

/// LINE channel credentials and reply API settings
#[derive(Debug, Clone, Deserialize)]
pub struct LineConfig {
    /// Channel secret, the HMAC key for webhook signatures
    #[serde(default = "empty_secret")]
    pub channel_secret: Secret<String>,

    /// Channel access token for the reply API
    #[serde(default = "empty_secret")]
    pub channel_access_token: Secret<String>,

    /// Messaging API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Reply request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl LineConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate LINE configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.channel_secret.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("LINE_CHANNEL_SECRET"));
        }
        if self.channel_access_token.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("LINE_CHANNEL_TOKEN"));
        }
        validate_url("line.api_base_url", &self.api_base_url)?;
        validate_timeout("line.timeout_secs", self.timeout_secs)
    }
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            channel_secret: empty_secret(),
            channel_access_token: empty_secret(),
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}

fn default_api_base_url() -> String {
    "https://api.line.me".to_string()
}

fn default_timeout() -> u64 {
    10
}
