//! HandleEventHandler - Command handler for a single webhook event.
//!
//! Classify → act → compose → deliver. Session state is written only on the
//! genre path and read only on the synopsis path.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::conversation::{reply, ConversationKey, Intent, SessionScope};
use crate::domain::messaging::{Message, MessageContent, WebhookEvent};
use crate::domain::movie::Genre;
use crate::ports::{DeliveryError, MessageSender, MovieCatalog, SessionStore};

/// Command to handle one inbound event.
#[derive(Debug, Clone)]
pub struct HandleEventCommand {
    pub event: WebhookEvent,
}

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleEventResult {
    /// New follower greeted.
    Greeted,
    /// Movie carousel delivered.
    MovieSent { genre: Genre, title: String },
    /// Catalog lookup failed; error text delivered instead.
    FetchFailed { genre: Genre },
    /// Carousel delivery failed; delivery-error text delivered instead.
    DeliveryFallbackSent { genre: Genre },
    /// Synopsis (or "none yet") delivered.
    SynopsisSent { found: bool },
    /// Unrecognized text parroted back.
    Echoed,
    /// Nothing to do for this event.
    Ignored { reason: &'static str },
}

/// Errors that escape a single event's handling.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("reply delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
}

/// Handler that turns one event into one reply.
pub struct HandleEventHandler {
    catalog: Arc<dyn MovieCatalog>,
    sender: Arc<dyn MessageSender>,
    sessions: Arc<dyn SessionStore>,
    scope: SessionScope,
    image_base_url: String,
}

impl HandleEventHandler {
    pub fn new(
        catalog: Arc<dyn MovieCatalog>,
        sender: Arc<dyn MessageSender>,
        sessions: Arc<dyn SessionStore>,
        scope: SessionScope,
        image_base_url: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            sender,
            sessions,
            scope,
            image_base_url: image_base_url.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: HandleEventCommand,
    ) -> Result<HandleEventResult, ReplyError> {
        let event = cmd.event;

        let Some(reply_token) = event.reply_token() else {
            return Ok(HandleEventResult::Ignored {
                reason: "no reply token",
            });
        };
        let key = self.scope.key_for(event.source());

        let intent = match &event {
            WebhookEvent::Follow(_) => Intent::Greet,
            WebhookEvent::Message(message) => match &message.message {
                MessageContent::Text(content) => Intent::classify(&content.text),
                MessageContent::Unsupported => {
                    return Ok(HandleEventResult::Ignored {
                        reason: "non-text message",
                    })
                }
            },
            WebhookEvent::Unsupported => {
                return Ok(HandleEventResult::Ignored {
                    reason: "unsupported event",
                })
            }
        };

        self.act(intent, reply_token, &key).await
    }

    async fn act(
        &self,
        intent: Intent,
        reply_token: &str,
        key: &ConversationKey,
    ) -> Result<HandleEventResult, ReplyError> {
        if let Some(genre) = intent.genre() {
            return self.send_random_movie(genre, reply_token, key).await;
        }

        match intent {
            Intent::Greet => {
                self.send(reply_token, reply::greeting()).await?;
                Ok(HandleEventResult::Greeted)
            }
            Intent::Synopsis => {
                let last = self.sessions.last_movie(key).await;
                self.send(reply_token, reply::synopsis(last.as_ref())).await?;
                Ok(HandleEventResult::SynopsisSent {
                    found: last.is_some(),
                })
            }
            Intent::Echo(text) => {
                self.send(reply_token, reply::echo(&text)).await?;
                Ok(HandleEventResult::Echoed)
            }
            // Genre intents return above.
            Intent::RandomAll
            | Intent::RandomRomance
            | Intent::RandomComedy
            | Intent::RandomHorror => Ok(HandleEventResult::Ignored {
                reason: "genre intent",
            }),
        }
    }

    async fn send_random_movie(
        &self,
        genre: Genre,
        reply_token: &str,
        key: &ConversationKey,
    ) -> Result<HandleEventResult, ReplyError> {
        let movie = match self.catalog.fetch_random_movie(genre).await {
            Ok(movie) => movie,
            Err(e) => {
                tracing::error!(%genre, error = %e, "Error fetching random movie");
                self.send(reply_token, reply::fetch_error()).await?;
                return Ok(HandleEventResult::FetchFailed { genre });
            }
        };

        self.sessions.remember(key, movie.clone()).await;

        let carousel = reply::movie_carousel(&movie, &self.image_base_url);
        if let Err(e) = self.send(reply_token, carousel).await {
            tracing::error!(%genre, error = %e, "Error sending movie carousel");
            self.send(reply_token, reply::delivery_error()).await?;
            return Ok(HandleEventResult::DeliveryFallbackSent { genre });
        }

        tracing::info!(%genre, title = %movie.title, "Sent random movie");
        Ok(HandleEventResult::MovieSent {
            genre,
            title: movie.title,
        })
    }

    async fn send(&self, reply_token: &str, messages: Vec<Message>) -> Result<(), DeliveryError> {
        self.sender.reply(reply_token, messages).await
    }
}
