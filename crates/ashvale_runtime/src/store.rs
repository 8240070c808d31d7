//! Session persistence.
//!
//! A [`SessionStore`] keeps the latest state of each session along with the
//! tail of its event trail. [`MemoryStore`] is the in-process
//! implementation; it expires idle sessions and caps the session count.

use std::collections::HashMap;

use ashvale_engine::{Event, GameState};
use ashvale_foundation::SessionId;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::StoreConfig;

/// One session's persisted record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Latest state.
    pub state: GameState,
    /// Most recent events, oldest first.
    pub events: Vec<Event>,
    /// Last write, in milliseconds since the epoch.
    pub updated_at: u64,
}

impl StoredSession {
    /// A record for a state with no events.
    #[must_use]
    pub fn new(state: GameState, updated_at: u64) -> Self {
        Self {
            state,
            events: Vec::new(),
            updated_at,
        }
    }

    /// Sets the event trail.
    #[must_use]
    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        self.events = events;
        self
    }
}

/// Where sessions live between commands.
///
/// Implementations must be safe to share between threads. Callers are
/// expected to serialize read-modify-write cycles per session.
pub trait SessionStore: Send + Sync {
    /// Inserts or replaces a session, then prunes. Returns the pruned ids.
    fn upsert(&self, session: &SessionId, record: StoredSession) -> Vec<SessionId>;

    /// A copy of the stored record.
    fn get(&self, session: &SessionId) -> Option<StoredSession>;

    /// Removes a session. Returns true if it existed.
    fn delete(&self, session: &SessionId) -> bool;

    /// Removes expired and excess sessions. Returns the removed ids.
    fn prune(&self, now_ms: u64) -> Vec<SessionId>;

    /// Number of stored sessions.
    fn len(&self) -> usize;

    /// Returns true if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store with TTL and capacity limits.
#[derive(Debug)]
pub struct MemoryStore {
    config: StoreConfig,
    sessions: RwLock<HashMap<SessionId, StoredSession>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// The limits in force.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn trim_events(&self, mut events: Vec<Event>) -> Vec<Event> {
        let max = self.config.max_events;
        if events.len() > max {
            events.drain(..events.len() - max);
        }
        events
    }

    /// Expires idle sessions, then evicts the oldest past capacity. `written`
    /// is never evicted for capacity.
    fn prune_locked(
        &self,
        sessions: &mut HashMap<SessionId, StoredSession>,
        now_ms: u64,
        written: Option<&SessionId>,
    ) -> Vec<SessionId> {
        let mut pruned = Vec::new();

        let ttl_ms = self.config.ttl_ms();
        if ttl_ms > 0 {
            sessions.retain(|id, record| {
                let keep = now_ms.saturating_sub(record.updated_at) <= ttl_ms;
                if !keep {
                    pruned.push(id.clone());
                }
                keep
            });
        }

        let max = self.config.max_sessions;
        if max > 0 && sessions.len() > max {
            let mut by_age: Vec<(u64, SessionId)> = sessions
                .iter()
                .filter(|(id, _)| Some(*id) != written)
                .map(|(id, record)| (record.updated_at, id.clone()))
                .collect();
            by_age.sort();
            for (_, id) in by_age.into_iter().take(sessions.len() - max) {
                sessions.remove(&id);
                pruned.push(id);
            }
        }

        if !pruned.is_empty() {
            info!(count = pruned.len(), remaining = sessions.len(), "pruned sessions");
        }
        pruned
    }
}

impl SessionStore for MemoryStore {
    fn upsert(&self, session: &SessionId, mut record: StoredSession) -> Vec<SessionId> {
        record.events = self.trim_events(record.events);
        let now_ms = record.updated_at;
        let mut sessions = self.sessions.write();
        sessions.insert(session.clone(), record);
        self.prune_locked(&mut sessions, now_ms, Some(session))
    }

    fn get(&self, session: &SessionId) -> Option<StoredSession> {
        self.sessions.read().get(session).cloned()
    }

    fn delete(&self, session: &SessionId) -> bool {
        self.sessions.write().remove(session).is_some()
    }

    fn prune(&self, now_ms: u64) -> Vec<SessionId> {
        let mut sessions = self.sessions.write();
        self.prune_locked(&mut sessions, now_ms, None)
    }

    fn len(&self) -> usize {
        self.sessions.read().len()
    }
}
