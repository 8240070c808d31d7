//! Shared fixtures for engine integration tests

use std::sync::Arc;

use ashvale_engine::{Command, CommandResult, Dispatcher, GameState, Registry, apply_events};
use ashvale_foundation::{RoomId, ScriptedRandom, SessionId};
use ashvale_world::{Catalog, HUB_ROOM, MapGenerator, RoomGraphCache};

/// A dispatcher over the standard world plus one session's state.
pub struct Game {
    pub dispatcher: Dispatcher,
    pub state: GameState,
    pub random: ScriptedRandom,
}

impl Game {
    pub fn new(session: &str) -> Self {
        Self::in_room(session, HUB_ROOM)
    }

    pub fn in_room(session: &str, room: &str) -> Self {
        let catalog = Arc::new(Catalog::standard().unwrap());
        let graphs = Arc::new(RoomGraphCache::new(MapGenerator::new(catalog)));
        Self {
            dispatcher: Dispatcher::new(Registry::standard().unwrap(), graphs),
            state: GameState::new(SessionId::new(session), RoomId::new(room)),
            random: ScriptedRandom::constant(0.0),
        }
    }

    /// Dispatches without applying.
    pub fn peek(&mut self, command: &Command) -> CommandResult {
        self.dispatcher
            .dispatch(&self.state, command, &mut self.random, 0)
            .unwrap()
    }

    /// Dispatches and folds the events into the state.
    pub fn play(&mut self, command: &Command) -> CommandResult {
        let result = self.peek(command);
        self.state = apply_events(&self.state, &result.events);
        result
    }

    pub fn catalog(&self) -> &Catalog {
        self.dispatcher.catalog()
    }
}
