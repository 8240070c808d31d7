//! Helpers for driving a session by text

use std::collections::{HashMap, VecDeque};

use ashvale_foundation::{Direction, RoomId, ScriptedRandom, SessionId};
use ashvale_runtime::{AshvaleConfig, CommandProcessor, CommandRequest, CommandResponse};
use ashvale_world::RoomGraph;

pub struct Player {
    pub processor: CommandProcessor,
    pub session: SessionId,
}

impl Player {
    pub fn new() -> Self {
        let processor = CommandProcessor::from_config(&AshvaleConfig::default())
            .unwrap()
            .with_random(Box::new(ScriptedRandom::constant(0.0)));
        let session = processor.sessions().create();
        Self { processor, session }
    }

    /// Sends text and insists it ran without a confirmation round.
    pub fn say(&self, text: &str) -> CommandResponse {
        let response = self
            .processor
            .execute(&self.session, &CommandRequest::text(text))
            .unwrap();
        assert!(!response.needs_confirm, "{text:?} needed confirmation");
        response
    }

    pub fn room(&self) -> RoomId {
        self.processor.sessions().require(&self.session).unwrap().room
    }

    /// Walks the shortest route to `target` one direction word at a time.
    pub fn walk_to(&self, target: &str) {
        let graph = self.processor.sessions().graphs().get(&self.session).unwrap();
        for direction in route(&graph, &self.room(), &RoomId::new(target)) {
            let response = self.say(direction.as_str());
            assert!(response.events.iter().any(|e| e.kind() == "move"));
        }
        assert_eq!(self.room().as_str(), target);
    }
}

/// Breadth-first route between two rooms.
pub fn route(graph: &RoomGraph, from: &RoomId, to: &RoomId) -> Vec<Direction> {
    let mut came_from: HashMap<RoomId, (RoomId, Direction)> = HashMap::new();
    let mut queue = VecDeque::from([from.clone()]);
    while let Some(current) = queue.pop_front() {
        if &current == to {
            break;
        }
        for (direction, next) in &graph.room(&current).unwrap().exits {
            if next != from && !came_from.contains_key(next) {
                came_from.insert(next.clone(), (current.clone(), *direction));
                queue.push_back(next.clone());
            }
        }
    }

    let mut path = Vec::new();
    let mut cursor = to.clone();
    while &cursor != from {
        let (previous, direction) = came_from[&cursor].clone();
        path.push(direction);
        cursor = previous;
    }
    path.reverse();
    path
}
