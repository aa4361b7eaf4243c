//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MovieCatalog` - Random movie lookup by genre
//! - `MessageSender` - Reply delivery to the chat platform
//! - `SessionStore` - Last movie shown, per conversation

mod message_sender;
mod movie_catalog;
mod session_store;

pub use message_sender::{DeliveryError, MessageSender};
pub use movie_catalog::MovieCatalog;
pub use session_store::SessionStore;
