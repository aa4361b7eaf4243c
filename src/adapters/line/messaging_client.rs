//! LINE Messaging API reply adapter.
//!
//! Implements the `MessageSender` port with `POST /v2/bot/message/reply`.
//! The channel access token is installed once as a default bearer header, so
//! a token that cannot form a header is rejected at construction time.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::messaging::Message;
use crate::ports::{DeliveryError, MessageSender};

/// Configuration for the LINE reply client.
#[derive(Debug, Clone)]
pub struct LineClientConfig {
    channel_access_token: Secret<String>,
    /// Base URL for the API (default: https://api.line.me).
    pub api_base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl LineClientConfig {
    pub fn new(channel_access_token: impl Into<String>) -> Self {
        Self {
            channel_access_token: Secret::new(channel_access_token.into()),
            api_base_url: "https://api.line.me".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Body of a reply request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRequest<'a> {
    reply_token: &'a str,
    messages: &'a [Message],
}

/// Error body returned by the Messaging API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Reply client for the LINE Messaging API.
pub struct LineMessagingClient {
    reply_url: String,
    client: Client,
}

impl LineMessagingClient {
    /// Creates a client, validating the token as a header value.
    ///
    /// # Errors
    ///
    /// - `InvalidCredentials` - token is empty or not a valid header value
    /// - `Network` - the HTTP client could not be built
    pub fn new(config: LineClientConfig) -> Result<Self, DeliveryError> {
        let token = config.channel_access_token.expose_secret();
        if token.trim().is_empty() {
            return Err(DeliveryError::InvalidCredentials(
                "channel access token is empty".to_string(),
            ));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
            DeliveryError::InvalidCredentials(
                "channel access token contains invalid characters".to_string(),
            )
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| DeliveryError::network(e.to_string()))?;

        Ok(Self {
            reply_url: format!(
                "{}/v2/bot/message/reply",
                config.api_base_url.trim_end_matches('/')
            ),
            client,
        })
    }
}

#[async_trait]
impl MessageSender for LineMessagingClient {
    async fn reply(&self, reply_token: &str, messages: Vec<Message>) -> Result<(), DeliveryError> {
        let request = ReplyRequest {
            reply_token,
            messages: &messages,
        };

        let response = self
            .client
            .post(&self.reply_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| DeliveryError::network(e.without_url().to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(count = messages.len(), "Reply delivered");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or(body);

        Err(DeliveryError::rejected(status.as_u16(), message))
    }
}
