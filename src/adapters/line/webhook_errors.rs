//! Webhook error types for LINE webhook handling.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that reject an inbound webhook request as a whole.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Request carried no `x-line-signature` header.
    #[error("Missing signature")]
    MissingSignature,

    /// Signature did not match the body.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Body is not a valid webhook batch.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl WebhookError {
    /// Maps the error to an HTTP status code.
    ///
    /// Every variant is a client error; nothing is retried or delivered.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::MissingSignature
            | WebhookError::InvalidSignature
            | WebhookError::ParseError(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "Rejected webhook request");
        self.status_code().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_signature_displays_correctly() {
        assert_eq!(format!("{}", WebhookError::InvalidSignature), "Invalid signature");
    }

    #[test]
    fn parse_error_displays_message() {
        let err = WebhookError::ParseError("invalid JSON".to_string());
        assert_eq!(format!("{}", err), "Parse error: invalid JSON");
    }

    #[test]
    fn all_errors_return_bad_request() {
        assert_eq!(WebhookError::MissingSignature.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(WebhookError::InvalidSignature.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            WebhookError::ParseError("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn into_response_uses_status_code() {
        let response = WebhookError::InvalidSignature.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
