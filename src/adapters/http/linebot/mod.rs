//! HTTP adapter for the LINE webhook.
//!
//! - `POST /linebot` - Verify, parse and answer a webhook batch

mod handlers;
mod routes;

pub use handlers::{handle_webhook, LineBotAppState};
pub use routes::linebot_routes;
