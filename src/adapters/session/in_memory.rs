//! In-Memory Session Store Adapter
//!
//! Keeps the last movie per conversation in a bounded map. When full, the
//! least recently used conversation is evicted.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::conversation::ConversationKey;
use crate::domain::movie::Movie;
use crate::ports::SessionStore;

/// Default number of conversations kept.
pub const DEFAULT_CAPACITY: usize = 1000;

#[derive(Debug)]
struct Entry {
    movie: Movie,
    last_used: u64,
}

#[derive(Debug, Default)]
struct Slots {
    entries: HashMap<ConversationKey, Entry>,
    clock: u64,
}

impl Slots {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn evict_least_recent(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            tracing::debug!(conversation = %key, "Evicting session entry");
            self.entries.remove(&key);
        }
    }
}

/// In-memory LRU session store
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    slots: Arc<Mutex<Slots>>,
    capacity: usize,
}

impl InMemorySessionStore {
    /// Create a store holding at most `capacity` conversations (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Arc::new(Mutex::new(Slots::default())),
            capacity: capacity.max(1),
        }
    }

    /// Number of conversations currently held
    pub async fn len(&self) -> usize {
        self.slots.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn remember(&self, key: &ConversationKey, movie: Movie) {
        let mut slots = self.slots.lock().await;
        let now = slots.tick();

        if !slots.entries.contains_key(key) && slots.entries.len() >= self.capacity {
            slots.evict_least_recent();
        }

        slots.entries.insert(
            key.clone(),
            Entry {
                movie,
                last_used: now,
            },
        );
    }

    async fn last_movie(&self, key: &ConversationKey) -> Option<Movie> {
        let mut slots = self.slots.lock().await;
        let now = slots.tick();

        slots.entries.get_mut(key).map(|entry| {
            entry.last_used = now;
            entry.movie.clone()
        })
    }
}
