//! Inbound LINE webhook events.
//!
//! Only the event shapes the bot acts on are modelled in full. Every other
//! event or message type decodes to an `Unsupported` variant so a batch with
//! unfamiliar events still parses.

use serde::Deserialize;

/// A webhook request body: zero or more events for one bot destination.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WebhookBatch {
    /// User ID of the bot that should receive these events.
    #[serde(default)]
    pub destination: Option<String>,

    pub events: Vec<WebhookEvent>,
}

/// A single platform event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum WebhookEvent {
    /// The user added the bot as a friend (or unblocked it).
    #[serde(rename = "follow")]
    Follow(FollowEvent),

    #[serde(rename = "message")]
    Message(MessageEvent),

    #[serde(other)]
    Unsupported,
}

impl WebhookEvent {
    /// Short event type name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            WebhookEvent::Follow(_) => "follow",
            WebhookEvent::Message(_) => "message",
            WebhookEvent::Unsupported => "unsupported",
        }
    }

    pub fn reply_token(&self) -> Option<&str> {
        match self {
            WebhookEvent::Follow(e) => e.reply_token.as_deref(),
            WebhookEvent::Message(e) => e.reply_token.as_deref(),
            WebhookEvent::Unsupported => None,
        }
    }

    pub fn source(&self) -> Option<&EventSource> {
        match self {
            WebhookEvent::Follow(e) => e.source.as_ref(),
            WebhookEvent::Message(e) => e.source.as_ref(),
            WebhookEvent::Unsupported => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowEvent {
    /// Absent when the channel is in standby mode.
    #[serde(default)]
    pub reply_token: Option<String>,

    #[serde(default)]
    pub source: Option<EventSource>,

    #[serde(default)]
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEvent {
    #[serde(default)]
    pub reply_token: Option<String>,

    #[serde(default)]
    pub source: Option<EventSource>,

    #[serde(default)]
    pub timestamp: Option<i64>,

    pub message: MessageContent,
}

/// Content of a message event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum MessageContent {
    #[serde(rename = "text")]
    Text(TextContent),

    /// Image, sticker, location and friends.
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextContent {
    #[serde(default)]
    pub id: Option<String>,

    pub text: String,
}

/// Where an event came from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EventSource {
    User {
        #[serde(rename = "userId")]
        user_id: String,
    },
    Group {
        #[serde(rename = "groupId")]
        group_id: String,
        #[serde(rename = "userId", default)]
        user_id: Option<String>,
    },
    Room {
        #[serde(rename = "roomId")]
        room_id: String,
        #[serde(rename = "userId", default)]
        user_id: Option<String>,
    },
    /// Source type this bot does not model.
    #[serde(other)]
    Unknown,
}

impl EventSource {
    /// Identifier of the chat the event belongs to: group, room, or 1:1 user.
    ///
    /// `None` for unknown source types.
    pub fn conversation_id(&self) -> Option<&str> {
        match self {
            EventSource::User { user_id } => Some(user_id),
            EventSource::Group { group_id, .. } => Some(group_id),
            EventSource::Room { room_id, .. } => Some(room_id),
            EventSource::Unknown => None,
        }
    }
}
