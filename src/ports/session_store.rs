//! SessionStore port - Interface for remembering the last movie shown.
//!
//! State is scoped to the process and keyed by conversation. Adapters may
//! evict entries at any time; a miss simply means "no movie yet".

use async_trait::async_trait;

use crate::domain::conversation::ConversationKey;
use crate::domain::movie::Movie;

/// Port for per-conversation session state.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Record `movie` as the last movie shown in `key`, replacing any previous one.
    async fn remember(&self, key: &ConversationKey, movie: Movie);

    /// The last movie shown in `key`, if any.
    async fn last_movie(&self, key: &ConversationKey) -> Option<Movie>;
}
