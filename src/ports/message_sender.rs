//! MessageSender port - Interface for delivering replies to the chat platform.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::messaging::Message;

/// Port for sending reply messages.
///
/// A reply is addressed by the single-use reply token of the event that
/// triggered it. Sending twice with one token is allowed to fail.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Send `messages` as the reply to the event identified by `reply_token`.
    async fn reply(&self, reply_token: &str, messages: Vec<Message>) -> Result<(), DeliveryError>;
}

/// Errors that can occur while delivering a reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// Platform refused the reply (expired token, bad payload, auth).
    #[error("delivery rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// Credentials cannot be used to build a client.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),
}

impl DeliveryError {
    pub fn network(message: impl Into<String>) -> Self {
        DeliveryError::Network(message.into())
    }

    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        DeliveryError::Rejected {
            status,
            message: message.into(),
        }
    }
}
