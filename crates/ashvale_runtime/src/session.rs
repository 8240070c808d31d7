//! Session lifecycle on top of a [`SessionStore`].
//!
//! The manager creates sessions, folds handler events into stored state,
//! and keeps the shared room-graph cache in step with the store. A session
//! that is pruned or removed loses its cached graph too.
//!
//! Read-modify-write cycles on one session are serialized through
//! [`SessionManager::exclusive`]; different sessions never wait on each other.

use std::collections::HashMap;
use std::sync::Arc;

use ashvale_engine::{Event, GameState, apply_events};
use ashvale_foundation::{Error, ErrorContext, ErrorKind, Result, RoomId, SessionId};
use ashvale_world::RoomGraphCache;
use parking_lot::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::clock::Clock;
use crate::store::{SessionStore, StoredSession};

/// Creates, loads, and updates sessions.
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    graphs: Arc<RoomGraphCache>,
    clock: Arc<dyn Clock>,
    locks: Mutex<HashMap<SessionId, Arc<Mutex<()>>>>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("sessions", &self.store.len())
            .field("graphs", &self.graphs.len())
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    /// Creates a manager over a store and the graph cache.
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>, graphs: Arc<RoomGraphCache>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            graphs,
            clock,
            locks: Mutex::new(HashMap::new()),
        }
    }

    fn session_lock(&self, session: &SessionId) -> Arc<Mutex<()>> {
        Arc::clone(self.locks.lock().entry(session.clone()).or_default())
    }

    /// Runs `f` while holding this session's lock. Concurrent callers for
    /// the same session run one after another.
    pub fn exclusive<R>(&self, session: &SessionId, f: impl FnOnce() -> R) -> R {
        let lock = self.session_lock(session);
        let _held = lock.lock();
        f()
    }

    /// Drops lock entries for sessions nobody is holding.
    fn release_locks(&self, sessions: &[SessionId]) {
        let mut locks = self.locks.lock();
        for session in sessions {
            if locks.get(session).is_some_and(|lock| Arc::strong_count(lock) == 1) {
                locks.remove(session);
            }
        }
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// The room-graph cache.
    #[must_use]
    pub fn graphs(&self) -> &Arc<RoomGraphCache> {
        &self.graphs
    }

    /// The clock used for timestamps.
    #[must_use]
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    fn start_room(&self) -> RoomId {
        self.graphs.catalog().layout().hub.clone()
    }

    fn initial_state(&self, session: &SessionId) -> GameState {
        GameState::new(session.clone(), self.start_room())
    }

    fn write(&self, session: &SessionId, record: StoredSession) {
        let pruned = self.store.upsert(session, record);
        for id in &pruned {
            self.graphs.evict(id);
        }
        self.release_locks(&pruned);
    }

    /// Starts a new session with a random id.
    #[must_use]
    pub fn create(&self) -> SessionId {
        let session = SessionId::new(Uuid::new_v4().to_string());
        let state = self.initial_state(&session);
        self.write(&session, StoredSession::new(state, self.clock.now_ms()));
        info!(session = %session, "session created");
        session
    }

    /// The stored state, if the session exists.
    #[must_use]
    pub fn get(&self, session: &SessionId) -> Option<GameState> {
        self.store.get(session).map(|record| record.state)
    }

    /// The stored state, or an error naming the session.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSession` if nothing is stored under the id.
    pub fn require(&self, session: &SessionId) -> Result<GameState> {
        self.get(session).ok_or_else(|| {
            Error::new(ErrorKind::UnknownSession(session.clone()))
                .with_context(ErrorContext::new().with_operation("session lookup"))
        })
    }

    /// The stored state, creating a fresh one under this id if absent.
    #[must_use]
    pub fn ensure(&self, session: &SessionId) -> GameState {
        if let Some(state) = self.get(session) {
            return state;
        }
        let state = self.initial_state(session);
        self.write(session, StoredSession::new(state.clone(), self.clock.now_ms()));
        info!(session = %session, "session created on first use");
        state
    }

    /// Applies `events` to `state`, stores the result, and returns it.
    #[must_use]
    pub fn update(&self, session: &SessionId, state: &GameState, events: &[Event]) -> GameState {
        let next = apply_events(state, events);
        let record = StoredSession::new(next.clone(), self.clock.now_ms()).with_events(events.to_vec());
        self.write(session, record);
        debug!(session = %session, events = events.len(), "session updated");
        next
    }

    /// Resets a session to its initial state. The room graph is kept, since
    /// it depends only on the id. This is the only way back from a fallen state.
    #[must_use]
    pub fn restart(&self, session: &SessionId) -> GameState {
        let state = self.initial_state(session);
        self.write(session, StoredSession::new(state.clone(), self.clock.now_ms()));
        info!(session = %session, "session restarted");
        state
    }

    /// Stores a state loaded from elsewhere under its own session id.
    pub fn restore(&self, state: GameState) -> SessionId {
        let session = state.session.clone();
        self.write(&session, StoredSession::new(state, self.clock.now_ms()));
        info!(session = %session, "session restored");
        session
    }

    /// Drops a session and its room graph.
    pub fn remove(&self, session: &SessionId) -> bool {
        self.graphs.evict(session);
        self.release_locks(std::slice::from_ref(session));
        self.store.delete(session)
    }

    /// Prunes expired and excess sessions, evicting their room graphs.
    pub fn prune(&self, now_ms: u64) -> Vec<SessionId> {
        let pruned = self.store.prune(now_ms);
        for session in &pruned {
            self.graphs.evict(session);
        }
        self.release_locks(&pruned);
        pruned
    }
}
