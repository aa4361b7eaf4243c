//! HTTP adapters - inbound webhook endpoints.

pub mod linebot;

pub use linebot::{linebot_routes, LineBotAppState};
