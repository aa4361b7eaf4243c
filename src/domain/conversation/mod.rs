//! Conversation domain module.
//!
//! - `intent` - Text command classification
//! - `session_key` - Partitioning of session state between chats
//! - `reply` - Outbound reply composition

mod intent;
pub mod reply;
mod session_key;

pub use intent::{
    Intent, GENRE_TRIGGERS, TRIGGER_RANDOM_ALL, TRIGGER_RANDOM_COMEDY, TRIGGER_RANDOM_HORROR,
    TRIGGER_RANDOM_ROMANCE, TRIGGER_SYNOPSIS,
};
pub use session_key::{ConversationKey, SessionScope};
