//! Short-lived memo of recent parses.
//!
//! Keyed by the normalised text and the parts of the visible context a
//! parser looks at. Entries expire after a fixed time-to-live.

use std::collections::HashMap;

use ashvale_engine::VisibleContext;
use ashvale_foundation::{ActorId, Direction, ItemId, RoomId};
use parking_lot::Mutex;

use crate::parser::ParsedCommand;

/// Default entry lifetime.
pub const DEFAULT_TTL_MS: u64 = 60_000;

/// What a cached parse depends on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    text: String,
    room: RoomId,
    exits: Vec<Direction>,
    actors: Vec<ActorId>,
    items: Vec<ItemId>,
}

impl CacheKey {
    /// Builds the key for `text` typed in `visible`.
    #[must_use]
    pub fn new(text: &str, visible: &VisibleContext) -> Self {
        Self {
            text: text.trim().to_lowercase(),
            room: visible.room.clone(),
            exits: visible.exits.clone(),
            actors: visible.actors.clone(),
            items: visible.items.clone(),
        }
    }
}

#[derive(Debug)]
struct Entry {
    parsed: ParsedCommand,
    expires_at: u64,
}

/// A thread-safe TTL cache of parses.
#[derive(Debug)]
pub struct ParseCache {
    ttl_ms: u64,
    entries: Mutex<HashMap<CacheKey, Entry>>,
}

impl Default for ParseCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_MS)
    }
}

impl ParseCache {
    /// Creates a cache whose entries live for `ttl_ms`.
    #[must_use]
    pub fn new(ttl_ms: u64) -> Self {
        Self {
            ttl_ms,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Entry lifetime in milliseconds.
    #[must_use]
    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    /// A live entry, if any. Expired entries are dropped on the way.
    #[must_use]
    pub fn get(&self, key: &CacheKey, now_ms: u64) -> Option<ParsedCommand> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if entry.expires_at > now_ms => Some(entry.parsed.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Stores a parse and sweeps expired entries.
    pub fn insert(&self, key: CacheKey, parsed: ParsedCommand, now_ms: u64) {
        let mut entries = self.entries.lock();
        entries.retain(|_, entry| entry.expires_at > now_ms);
        entries.insert(
            key,
            Entry {
                parsed,
                expires_at: now_ms.saturating_add(self.ttl_ms),
            },
        );
    }

    /// Number of stored entries, expired or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
