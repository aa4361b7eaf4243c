//! Axum router configuration for the LINE webhook endpoint.

use axum::{routing::post, Router};

use super::handlers::{handle_webhook, LineBotAppState};

/// Create the LINE webhook router.
///
/// # Routes
/// - `POST /linebot` - Handle LINE webhook deliveries (signature verified)
pub fn linebot_routes() -> Router<LineBotAppState> {
    Router::new().route("/linebot", post(handle_webhook))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use tower_http::timeout::TimeoutLayer;

    use crate::adapters::line::{sign_body, LineSignatureVerifier, SIGNATURE_HEADER};
    use crate::adapters::session::InMemorySessionStore;
    use crate::application::{HandleBatchHandler, HandleEventHandler};
    use crate::domain::conversation::SessionScope;
    use crate::domain::messaging::Message;
    use crate::domain::movie::{Genre, Movie, MovieError};
    use crate::ports::{DeliveryError, MessageSender, MovieCatalog};

    const SECRET: &str = "test-channel-secret";

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    /// Returns the same movie after an optional delay.
    struct StaticCatalog {
        delay: Duration,
    }

    #[async_trait]
    impl MovieCatalog for StaticCatalog {
        async fn fetch_random_movie(&self, _genre: Genre) -> Result<Movie, MovieError> {
            tokio::time::sleep(self.delay).await;
            Ok(Movie::new("X", "overview"))
        }
    }

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<(String, Vec<Message>)>>,
    }

    impl RecordingSender {
        fn tokens(&self) -> Vec<String> {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .map(|(token, _)| token.clone())
                .collect()
        }
    }

    #[async_trait]
    impl MessageSender for RecordingSender {
        async fn reply(
            &self,
            reply_token: &str,
            messages: Vec<Message>,
        ) -> Result<(), DeliveryError> {
            self.sent
                .lock()
                .unwrap()
                .push((reply_token.to_string(), messages));
            Ok(())
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn app_with_delay(sender: Arc<RecordingSender>, delay: Duration) -> Router {
        let event_handler = HandleEventHandler::new(
            Arc::new(StaticCatalog { delay }),
            sender,
            Arc::new(InMemorySessionStore::default()),
            SessionScope::Conversation,
            "https://img",
        );
        let state = LineBotAppState::new(
            Arc::new(LineSignatureVerifier::new(SECRET)),
            Arc::new(HandleBatchHandler::new(Arc::new(event_handler))),
        );
        linebot_routes().with_state(state)
    }

    fn app(sender: Arc<RecordingSender>) -> Router {
        app_with_delay(sender, Duration::ZERO)
    }

    fn follow(token: &str, source: Value) -> Value {
        json!({"type": "follow", "replyToken": token, "source": source, "timestamp": 1})
    }

    fn text(token: &str, text: &str) -> Value {
        json!({
            "type": "message",
            "replyToken": token,
            "source": {"type": "user", "userId": "U1"},
            "timestamp": 1,
            "message": {"type": "text", "id": "m1", "text": text}
        })
    }

    fn batch_body(events: Vec<Value>) -> String {
        json!({"destination": "Ubot", "events": events}).to_string()
    }

    fn follow_body() -> String {
        batch_body(vec![follow("rt-1", json!({"type": "user", "userId": "U1"}))])
    }

    fn request(body: String, signature: Option<String>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/linebot")
            .header("content-type", "application/json");
        if let Some(signature) = signature {
            builder = builder.header(SIGNATURE_HEADER, signature);
        }
        builder.body(Body::from(body)).unwrap()
    }

    fn signed(body: String) -> Request<Body> {
        let signature = sign_body(SECRET, body.as_bytes());
        request(body, Some(signature))
    }

    /// Polls until `count` replies were sent or five seconds pass.
    async fn wait_for_replies(sender: &RecordingSender, count: usize) -> Vec<String> {
        for _ in 0..100 {
            if sender.sent.lock().unwrap().len() >= count {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        sender.tokens()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn signed_follow_event_returns_ok_and_replies() {
        let sender = Arc::new(RecordingSender::default());

        let response = app(sender.clone())
            .oneshot(signed(follow_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(wait_for_replies(&sender, 1).await, vec!["rt-1"]);
    }

    #[tokio::test]
    async fn slow_batch_is_answered_in_full_despite_request_timeout() {
        let sender = Arc::new(RecordingSender::default());
        let app = app_with_delay(sender.clone(), Duration::from_millis(600))
            .layer(TimeoutLayer::new(Duration::from_secs(1)));
        let body = batch_body(vec![
            text("rt-1", "สุ่มหนัง"),
            text("rt-2", "สุ่มหนัง"),
            follow("rt-3", json!({"type": "user", "userId": "U1"})),
        ]);

        let response = app.oneshot(signed(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            wait_for_replies(&sender, 3).await,
            vec!["rt-1", "rt-2", "rt-3"]
        );
    }

    #[tokio::test]
    async fn unknown_source_type_does_not_drop_the_batch() {
        let sender = Arc::new(RecordingSender::default());
        let body = batch_body(vec![
            follow("rt-1", json!({"type": "user", "userId": "U1"})),
            follow("rt-2", json!({"type": "channel"})),
        ]);

        let response = app(sender.clone()).oneshot(signed(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(wait_for_replies(&sender, 2).await, vec!["rt-1", "rt-2"]);
    }

    #[tokio::test]
    async fn missing_signature_is_bad_request() {
        let sender = Arc::new(RecordingSender::default());

        let response = app(sender.clone())
            .oneshot(request(follow_body(), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(sender.tokens().is_empty());
    }

    #[tokio::test]
    async fn wrong_signature_is_bad_request() {
        let sender = Arc::new(RecordingSender::default());
        let body = follow_body();
        let signature = sign_body("other-secret", body.as_bytes());

        let response = app(sender.clone())
            .oneshot(request(body, Some(signature)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(sender.tokens().is_empty());
    }

    #[tokio::test]
    async fn signed_garbage_is_bad_request() {
        let sender = Arc::new(RecordingSender::default());

        let response = app(sender.clone())
            .oneshot(signed("not json".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(sender.tokens().is_empty());
    }

    #[tokio::test]
    async fn empty_batch_returns_ok() {
        let sender = Arc::new(RecordingSender::default());

        let response = app(sender.clone())
            .oneshot(signed(batch_body(vec![])))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(sender.tokens().is_empty());
    }

    #[tokio::test]
    async fn get_is_not_routed() {
        let sender = Arc::new(RecordingSender::default());

        let response = app(sender)
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/linebot")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
