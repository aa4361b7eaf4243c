//! Outbound LINE message objects.
//!
//! These serialize directly to the Messaging API wire format, so the
//! composer's output can be handed to any `MessageSender` unchanged.

use serde::Serialize;

/// Maximum characters in a text message.
pub const MAX_TEXT_CHARS: usize = 5000;

/// Maximum characters in a carousel column title.
pub const MAX_COLUMN_TITLE_CHARS: usize = 40;

/// A message the bot sends back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Message {
    Text(TextMessage),
    Template(TemplateMessage),
}

impl Message {
    /// Text body, if this is a text message.
    pub fn text(&self) -> Option<&str> {
        match self {
            Message::Text(m) => Some(&m.text),
            Message::Template(_) => None,
        }
    }

    pub fn quick_reply(&self) -> Option<&QuickReply> {
        match self {
            Message::Text(m) => m.quick_reply.as_ref(),
            Message::Template(m) => m.quick_reply.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMessage {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_reply: Option<QuickReply>,
}

impl TextMessage {
    /// Creates a text message, truncating to the platform limit.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: truncate_chars(text.into(), MAX_TEXT_CHARS),
            quick_reply: None,
        }
    }

    pub fn with_quick_reply(mut self, quick_reply: QuickReply) -> Self {
        self.quick_reply = Some(quick_reply);
        self
    }
}

impl From<TextMessage> for Message {
    fn from(message: TextMessage) -> Self {
        Message::Text(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMessage {
    /// Shown in notifications and on clients that cannot render templates.
    pub alt_text: String,

    pub template: Template,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_reply: Option<QuickReply>,
}

impl From<TemplateMessage> for Message {
    fn from(message: TemplateMessage) -> Self {
        Message::Template(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Template {
    Carousel(CarouselTemplate),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselTemplate {
    pub columns: Vec<CarouselColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselColumn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub text: String,

    pub actions: Vec<Action>,
}

/// Tappable shortcuts shown under a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickReply {
    pub items: Vec<QuickReplyItem>,
}

impl QuickReply {
    /// Builds a quick reply where every item sends its own label as text.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = labels
            .into_iter()
            .map(|label| {
                let label = label.into();
                QuickReplyItem::Action {
                    action: Action::message(label.clone(), label),
                }
            })
            .collect();
        Self { items }
    }

    /// Text each item sends when tapped.
    pub fn texts(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(|QuickReplyItem::Action { action }| match action {
                Action::Message { text, .. } => text.as_str(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuickReplyItem {
    Action { action: Action },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    /// Sends `text` as if the user typed it.
    Message { label: String, text: String },
}

impl Action {
    pub fn message(label: impl Into<String>, text: impl Into<String>) -> Self {
        Action::Message {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Truncates to at most `max` characters (not bytes).
pub fn truncate_chars(text: String, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text,
    }
}
