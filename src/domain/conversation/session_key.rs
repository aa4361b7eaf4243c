//! Keys for per-conversation session state.

use std::fmt;

use serde::Deserialize;

use crate::domain::messaging::EventSource;

/// How session state is partitioned between chats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionScope {
    /// Each group, room, or 1:1 chat remembers its own last movie.
    #[default]
    Conversation,
    /// One slot shared by everyone; suits single-user deployments.
    Global,
}

impl SessionScope {
    /// Key under which the event's session state lives.
    pub fn key_for(&self, source: Option<&EventSource>) -> ConversationKey {
        match (self, source.and_then(EventSource::conversation_id)) {
            (SessionScope::Conversation, Some(id)) => ConversationKey::new(id),
            _ => ConversationKey::global(),
        }
    }
}

/// Identifier that session state is keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversationKey(String);

impl ConversationKey {
    const GLOBAL: &'static str = "*";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn global() -> Self {
        Self(Self::GLOBAL.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
