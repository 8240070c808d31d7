//! Routes commands to handlers.

use std::sync::Arc;

use ashvale_foundation::{RandomSource, Result};
use ashvale_world::{Catalog, RoomGraph, RoomGraphCache};
use tracing::debug;

use crate::command::{Command, CommandResult, Verb, verb_listing};
use crate::registry::Registry;
use crate::state::GameState;
use crate::visibility::{VisibleContext, resolve_visible_context};

/// Shown instead of running any verb once the player has fallen.
pub const FALLEN_MESSAGE: &str =
    "You are fallen. The game is over. Use the restart prompt to begin anew.";

/// Everything a handler may read besides state and command.
pub struct CommandContext<'a> {
    /// Freshly resolved view of the current room.
    pub visible: VisibleContext,
    /// The session's room graph.
    pub graph: &'a RoomGraph,
    /// Static content.
    pub catalog: &'a Catalog,
    /// Registered verbs, sorted.
    pub verbs: Vec<Verb>,
    /// Injected entropy.
    pub random: &'a mut dyn RandomSource,
    /// Injected clock, milliseconds since the epoch.
    pub now_ms: u64,
}

/// Resolves visibility and invokes the registered handler.
#[derive(Debug)]
pub struct Dispatcher {
    registry: Registry,
    graphs: Arc<RoomGraphCache>,
}

impl Dispatcher {
    /// Creates a dispatcher over a registry and a shared graph cache.
    #[must_use]
    pub fn new(registry: Registry, graphs: Arc<RoomGraphCache>) -> Self {
        Self { registry, graphs }
    }

    /// The registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The graph cache.
    #[must_use]
    pub fn graphs(&self) -> &Arc<RoomGraphCache> {
        &self.graphs
    }

    /// Static content.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.graphs.catalog()
    }

    /// Resolves the visible context for a state.
    ///
    /// # Errors
    ///
    /// Returns generation faults, or `UnknownRoom` if the state is off the map.
    pub fn visible_context(&self, state: &GameState) -> Result<VisibleContext> {
        let graph = self.graphs.get(&state.session)?;
        resolve_visible_context(state, &graph)
    }

    /// Runs one command. The state itself is never modified.
    ///
    /// # Errors
    ///
    /// Player mistakes are never errors. Errors mean the session's graph could
    /// not be generated or the state points at a room the graph lacks.
    pub fn dispatch(
        &self,
        state: &GameState,
        command: &Command,
        random: &mut dyn RandomSource,
        now_ms: u64,
    ) -> Result<CommandResult> {
        if state.is_fallen() {
            debug!(session = %state.session, verb = %command.verb, "dispatch refused, player fallen");
            return Ok(CommandResult::message(FALLEN_MESSAGE));
        }

        let verbs = self.registry.verbs();
        let Some(handler) = self
            .registry
            .get(command.verb)
            .or_else(|| self.registry.get(Verb::Help))
        else {
            return Ok(CommandResult::message(format!(
                "Unknown command. Available commands: {}",
                verb_listing(&verbs)
            )));
        };

        let graph = self.graphs.get(&state.session)?;
        let visible = resolve_visible_context(state, &graph)?;
        let mut context = CommandContext {
            visible,
            graph: &graph,
            catalog: self.graphs.catalog(),
            verbs,
            random,
            now_ms,
        };
        let result = handler(state, command, &mut context);
        debug!(
            session = %state.session,
            command = %command,
            events = result.events.len(),
            "command dispatched"
        );
        Ok(result)
    }
}
