//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Inbound LINE webhook endpoint (axum)
//! - `line` - Signature verification and reply delivery
//! - `session` - In-memory last-movie store
//! - `tmdb` - Movie catalog backed by TMDB

pub mod http;
pub mod line;
pub mod session;
pub mod tmdb;

pub use http::{linebot_routes, LineBotAppState};
pub use line::{LineMessagingClient, LineSignatureVerifier, WebhookError};
pub use session::InMemorySessionStore;
pub use tmdb::{TmdbConfig, TmdbMovieCatalog};
