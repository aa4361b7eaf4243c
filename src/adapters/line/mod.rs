//! LINE adapter - webhook signature verification and reply delivery.

mod messaging_client;
mod webhook_errors;
mod webhook_verifier;

pub use messaging_client::{LineClientConfig, LineMessagingClient};
pub use webhook_errors::WebhookError;
pub use webhook_verifier::{sign_body, LineSignatureVerifier, SIGNATURE_HEADER};
