//! HandleBatchHandler - Fans a verified webhook batch out to the event handler.
//!
//! Events are handled in order. A failure on one event is logged and counted;
//! the remaining events still run.

use std::sync::Arc;

use crate::domain::messaging::WebhookBatch;

use super::{HandleEventCommand, HandleEventHandler, HandleEventResult};

/// Command carrying a whole verified batch.
#[derive(Debug, Clone)]
pub struct HandleBatchCommand {
    pub batch: WebhookBatch,
}

/// Per-batch tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub handled: usize,
    pub ignored: usize,
    pub failed: usize,
}

pub struct HandleBatchHandler {
    event_handler: Arc<HandleEventHandler>,
}

impl HandleBatchHandler {
    pub fn new(event_handler: Arc<HandleEventHandler>) -> Self {
        Self { event_handler }
    }

    pub async fn handle(&self, cmd: HandleBatchCommand) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for event in cmd.batch.events {
            let kind = event.kind();
            let token = token_prefix(event.reply_token());
            match self.event_handler.handle(HandleEventCommand { event }).await {
                Ok(HandleEventResult::Ignored { reason }) => {
                    tracing::debug!(kind, %token, reason, "Skipped webhook event");
                    outcome.ignored += 1;
                }
                Ok(result) => {
                    tracing::debug!(kind, %token, ?result, "Handled webhook event");
                    outcome.handled += 1;
                }
                Err(e) => {
                    tracing::error!(kind, %token, error = %e, "Failed to handle webhook event");
                    outcome.failed += 1;
                }
            }
        }

        outcome
    }
}

/// Leading characters of a reply token, enough to correlate log lines.
fn token_prefix(token: Option<&str>) -> String {
    token
        .map(|t| t.chars().take(8).collect())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use crate::domain::conversation::SessionScope;
    use crate::domain::messaging::{
        EventSource, FollowEvent, Message, MessageContent, MessageEvent, TextContent,
        WebhookEvent,
    };
    use crate::domain::movie::{Genre, Movie, MovieError};
    use crate::ports::{DeliveryError, MessageSender, MovieCatalog};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StaticCatalog;

    #[async_trait]
    impl MovieCatalog for StaticCatalog {
        async fn fetch_random_movie(&self, _genre: Genre) -> Result<Movie, MovieError> {
            Ok(Movie::new("X", "overview"))
        }
    }

    /// Rejects replies addressed to one token, accepts the rest.
    struct SelectiveSender {
        reject_token: &'static str,
        delivered: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl MessageSender for SelectiveSender {
        async fn reply(
            &self,
            reply_token: &str,
            _messages: Vec<Message>,
        ) -> Result<(), DeliveryError> {
            if reply_token == self.reject_token {
                return Err(DeliveryError::rejected(400, "Invalid reply token"));
            }
            self.delivered.lock().unwrap().push(reply_token.to_string());
            Ok(())
        }
    }

    fn user() -> Option<EventSource> {
        Some(EventSource::User {
            user_id: "U1".to_string(),
        })
    }

    fn text(token: &str, text: &str) -> WebhookEvent {
        WebhookEvent::Message(MessageEvent {
            reply_token: Some(token.to_string()),
            source: user(),
            timestamp: None,
            message: MessageContent::Text(TextContent {
                id: None,
                text: text.to_string(),
            }),
        })
    }

    fn handler(sender: Arc<SelectiveSender>) -> HandleBatchHandler {
        HandleBatchHandler::new(Arc::new(HandleEventHandler::new(
            Arc::new(StaticCatalog),
            sender,
            Arc::new(InMemorySessionStore::default()),
            SessionScope::Conversation,
            "https://img",
        )))
    }

    #[tokio::test]
    async fn failure_on_one_event_does_not_abort_the_rest() {
        let sender = Arc::new(SelectiveSender {
            reject_token: "bad",
            delivered: Mutex::new(Vec::new()),
        });
        let batch = WebhookBatch {
            destination: None,
            events: vec![
                text("first", "hello"),
                WebhookEvent::Follow(FollowEvent {
                    reply_token: Some("bad".to_string()),
                    source: user(),
                    timestamp: None,
                }),
                text("third", "สุ่มหนัง"),
            ],
        };

        let outcome = handler(sender.clone())
            .handle(HandleBatchCommand { batch })
            .await;

        assert_eq!(
            outcome,
            BatchOutcome {
                handled: 2,
                ignored: 0,
                failed: 1
            }
        );
        assert_eq!(
            *sender.delivered.lock().unwrap(),
            vec!["first".to_string(), "third".to_string()]
        );
    }

    #[tokio::test]
    async fn unsupported_events_are_counted_as_ignored() {
        let sender = Arc::new(SelectiveSender {
            reject_token: "",
            delivered: Mutex::new(Vec::new()),
        });
        let batch = WebhookBatch {
            destination: None,
            events: vec![WebhookEvent::Unsupported, text("t", "hi")],
        };

        let outcome = handler(sender).handle(HandleBatchCommand { batch }).await;

        assert_eq!(outcome.ignored, 1);
        assert_eq!(outcome.handled, 1);
    }

    #[test]
    fn token_prefix_keeps_eight_chars() {
        assert_eq!(token_prefix(Some("0123456789abcdef")), "01234567");
        assert_eq!(token_prefix(Some("abc")), "abc");
        assert_eq!(token_prefix(None), "-");
    }

    #[tokio::test]
    async fn empty_batch_is_a_no_op() {
        let sender = Arc::new(SelectiveSender {
            reject_token: "",
            delivered: Mutex::new(Vec::new()),
        });

        let outcome = handler(sender.clone())
            .handle(HandleBatchCommand {
                batch: WebhookBatch {
                    destination: None,
                    events: vec![],
                },
            })
            .await;

        assert_eq!(outcome, BatchOutcome::default());
        assert!(sender.delivered.lock().unwrap().is_empty());
    }
}
