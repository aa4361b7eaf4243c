//! LINE messaging domain module.
//!
//! - `event` - Inbound webhook batch and event shapes
//! - `message` - Outbound message objects in Messaging API format

mod event;
mod message;

pub use event::{
    EventSource, FollowEvent, MessageContent, MessageEvent, TextContent, WebhookBatch,
    WebhookEvent,
};
pub use message::{
    truncate_chars, Action, CarouselColumn, CarouselTemplate, Message, QuickReply,
    QuickReplyItem, Template, TemplateMessage, TextMessage, MAX_COLUMN_TITLE_CHARS,
    MAX_TEXT_CHARS,
};
