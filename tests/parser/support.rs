//! Shared fixtures for parser integration tests

use std::sync::Arc;

use ashvale_engine::{Dispatcher, GameState, Registry, Verb, VisibleContext};
use ashvale_foundation::{RoomId, SessionId};
use ashvale_world::{Catalog, HUB_ROOM, MapGenerator, RoomGraphCache};

pub struct Scene {
    pub dispatcher: Dispatcher,
    pub visible: VisibleContext,
    pub verbs: Vec<Verb>,
}

impl Scene {
    pub fn hub() -> Self {
        Self::at(HUB_ROOM)
    }

    pub fn at(room: &str) -> Self {
        let catalog = Arc::new(Catalog::standard().unwrap());
        let graphs = Arc::new(RoomGraphCache::new(MapGenerator::new(catalog)));
        let dispatcher = Dispatcher::new(Registry::standard().unwrap(), graphs);
        let state = GameState::new(SessionId::new("parser-scene"), RoomId::new(room));
        let visible = dispatcher.visible_context(&state).unwrap();
        let verbs = dispatcher.registry().verbs();
        Self {
            dispatcher,
            visible,
            verbs,
        }
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(self.dispatcher.graphs().catalog())
    }
}
