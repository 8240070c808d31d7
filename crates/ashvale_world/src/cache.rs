//! Per-session memoization of generated room graphs.

use std::collections::HashMap;
use std::sync::Arc;

use ashvale_foundation::{Result, SessionId};
use parking_lot::RwLock;
use tracing::debug;

use crate::catalog::Catalog;
use crate::generator::MapGenerator;
use crate::room::RoomGraph;

/// Caches one [`RoomGraph`] per session.
///
/// Graphs are generated outside the lock. When two callers race on the same
/// session the first insert wins and both observe the same `Arc`.
#[derive(Debug)]
pub struct RoomGraphCache {
    generator: MapGenerator,
    graphs: RwLock<HashMap<SessionId, Arc<RoomGraph>>>,
}

impl RoomGraphCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new(generator: MapGenerator) -> Self {
        Self {
            generator,
            graphs: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the session's graph, generating it on first use.
    ///
    /// # Errors
    ///
    /// Propagates `GenerationFailed` from the generator. Failures are not cached.
    pub fn get(&self, session: &SessionId) -> Result<Arc<RoomGraph>> {
        if let Some(graph) = self.graphs.read().get(session) {
            return Ok(Arc::clone(graph));
        }

        debug!(session = %session, "room graph cache miss");
        let graph = Arc::new(self.generator.generate(session)?);
        let mut graphs = self.graphs.write();
        Ok(Arc::clone(graphs.entry(session.clone()).or_insert(graph)))
    }

    /// Drops a session's graph. Returns true if one was cached.
    pub fn evict(&self, session: &SessionId) -> bool {
        self.graphs.write().remove(session).is_some()
    }

    /// Returns true if the session has a cached graph.
    #[must_use]
    pub fn contains(&self, session: &SessionId) -> bool {
        self.graphs.read().contains_key(session)
    }

    /// Number of cached graphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graphs.read().len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graphs.read().is_empty()
    }

    /// The catalog graphs are generated from.
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        self.generator.catalog()
    }
}
