//! HTTP handler for LINE webhook deliveries.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};

use crate::adapters::line::{LineSignatureVerifier, WebhookError, SIGNATURE_HEADER};
use crate::application::{HandleBatchCommand, HandleBatchHandler};

/// Shared state for the webhook route.
#[derive(Clone)]
pub struct LineBotAppState {
    pub verifier: Arc<LineSignatureVerifier>,
    pub batch_handler: Arc<HandleBatchHandler>,
}

impl LineBotAppState {
    pub fn new(
        verifier: Arc<LineSignatureVerifier>,
        batch_handler: Arc<HandleBatchHandler>,
    ) -> Self {
        Self {
            verifier,
            batch_handler,
        }
    }
}

/// POST /linebot - Handle a LINE webhook batch
///
/// Rejects the whole request with 400 when the signature is missing or wrong,
/// or when the body is not a webhook batch. A verified batch is answered with
/// 200 at once; its events are handled on a background task, so request
/// timeouts never cut event handling short.
pub async fn handle_webhook(
    State(state): State<LineBotAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, WebhookError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(WebhookError::MissingSignature)?;

    let batch = state.verifier.verify_and_parse(&body, signature)?;
    let events = batch.events.len();
    let batch_handler = state.batch_handler.clone();

    tokio::spawn(async move {
        let outcome = batch_handler.handle(HandleBatchCommand { batch }).await;

        tracing::info!(
            events,
            handled = outcome.handled,
            ignored = outcome.ignored,
            failed = outcome.failed,
            "Processed webhook batch"
        );
    });

    Ok(StatusCode::OK)
}
