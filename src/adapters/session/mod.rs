//! Session storage adapters.

mod in_memory;

pub use in_memory::{InMemorySessionStore, DEFAULT_CAPACITY};
