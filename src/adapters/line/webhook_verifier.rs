//! LINE webhook signature verification.
//!
//! The `x-line-signature` header is the Base64-encoded HMAC-SHA256 of the raw
//! request body, keyed with the channel secret.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, Secret};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::domain::messaging::WebhookBatch;

use super::webhook_errors::WebhookError;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the body signature.
pub const SIGNATURE_HEADER: &str = "x-line-signature";

/// Verifier for LINE webhook signatures.
pub struct LineSignatureVerifier {
    channel_secret: Secret<String>,
}

impl LineSignatureVerifier {
    pub fn new(channel_secret: impl Into<String>) -> Self {
        Self {
            channel_secret: Secret::new(channel_secret.into()),
        }
    }

    /// Verifies the signature and parses the batch.
    ///
    /// # Errors
    ///
    /// - `InvalidSignature` - signature is not Base64 or does not match
    /// - `ParseError` - body is not a webhook batch
    pub fn verify_and_parse(
        &self,
        body: &[u8],
        signature: &str,
    ) -> Result<WebhookBatch, WebhookError> {
        self.verify(body, signature)?;

        serde_json::from_slice(body).map_err(|e| WebhookError::ParseError(e.to_string()))
    }

    /// Checks `signature` against the body using constant-time comparison.
    pub fn verify(&self, body: &[u8], signature: &str) -> Result<(), WebhookError> {
        let provided = STANDARD
            .decode(signature.trim())
            .map_err(|_| WebhookError::InvalidSignature)?;

        let expected = self.compute_signature(body)?;

        if !constant_time_compare(&expected, &provided) {
            return Err(WebhookError::InvalidSignature);
        }
        Ok(())
    }

    fn compute_signature(&self, body: &[u8]) -> Result<Vec<u8>, WebhookError> {
        let mut mac = HmacSha256::new_from_slice(self.channel_secret.expose_secret().as_bytes())
            .map_err(|_| WebhookError::InvalidSignature)?;
        mac.update(body);
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Computes a valid `x-line-signature` value, for signing test fixtures.
pub fn sign_body(channel_secret: &str, body: &[u8]) -> String {
    let mut mac = match HmacSha256::new_from_slice(channel_secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return String::new(),
    };
    mac.update(body);
    STANDARD.encode(mac.finalize().into_bytes())
}
