//! Generated rooms and the per-session room graph.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use ashvale_foundation::{ActorId, Direction, Error, ItemId, Result, RoomId};

use crate::template::RoomTemplate;

/// A room instance inside a generated graph.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    /// Template id.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Flavour text.
    pub description: String,
    /// Neighbours by direction. At most one per direction.
    pub exits: BTreeMap<Direction, RoomId>,
    /// Starting items, copied from the template.
    pub items: Vec<ItemId>,
    /// Starting actors, copied from the template.
    pub actors: Vec<ActorId>,
    /// Trait tags.
    pub traits: Vec<String>,
}

impl Room {
    /// Instantiates a template with no exits.
    #[must_use]
    pub fn from_template(template: &RoomTemplate) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            description: template.description.clone(),
            exits: BTreeMap::new(),
            items: template.items.clone(),
            actors: template.actors.clone(),
            traits: template.traits.clone(),
        }
    }

    /// Neighbour in `direction`, if any.
    #[must_use]
    pub fn exit(&self, direction: Direction) -> Option<&RoomId> {
        self.exits.get(&direction)
    }

    /// Exit directions in canonical order.
    #[must_use]
    pub fn exit_directions(&self) -> Vec<Direction> {
        self.exits.keys().copied().collect()
    }

    /// Directions from `candidates` with no exit yet.
    #[must_use]
    pub fn free_directions(&self, candidates: &[Direction]) -> Vec<Direction> {
        candidates
            .iter()
            .copied()
            .filter(|direction| !self.exits.contains_key(direction))
            .collect()
    }

    /// Formats the exit list as `No exits`, `Exit: north`, or `Exits: north, up`.
    #[must_use]
    pub fn exit_summary(&self) -> String {
        let names: Vec<&str> = self.exits.keys().map(|d| d.as_str()).collect();
        match names.as_slice() {
            [] => "No exits".to_string(),
            [only] => format!("Exit: {only}"),
            many => format!("Exits: {}", many.join(", ")),
        }
    }
}

/// The generated map for one session. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomGraph {
    hub: RoomId,
    rooms: BTreeMap<RoomId, Room>,
}

impl RoomGraph {
    /// Wraps a finished set of rooms.
    ///
    /// # Errors
    ///
    /// Returns an error if the hub is missing, an exit points at an unknown
    /// room, or an exit has no matching return exit.
    pub fn new(hub: RoomId, rooms: BTreeMap<RoomId, Room>) -> Result<Self> {
        let graph = Self { hub, rooms };
        graph.check_exits()?;
        Ok(graph)
    }

    /// The starting room.
    #[must_use]
    pub fn hub(&self) -> &RoomId {
        &self.hub
    }

    /// Looks up a room.
    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Looks up a room that must exist.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRoom` if the id is not part of this graph.
    pub fn expect_room(&self, id: &RoomId) -> Result<&Room> {
        self.rooms.get(id).ok_or_else(|| Error::unknown_room(id.clone()))
    }

    /// All rooms, ordered by id.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Number of rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns true if the graph has no rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Rooms reachable from `start`, in breadth-first order.
    #[must_use]
    pub fn reachable_from(&self, start: &RoomId) -> Vec<RoomId> {
        breadth_first(&self.rooms, start)
    }

    /// Returns true if every room is reachable from the hub.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.reachable_from(&self.hub).len() == self.rooms.len()
    }

    fn check_exits(&self) -> Result<()> {
        if !self.rooms.contains_key(&self.hub) {
            return Err(Error::unknown_room(self.hub.clone()));
        }
        for room in self.rooms.values() {
            for (direction, target) in &room.exits {
                let back = self
                    .rooms
                    .get(target)
                    .ok_or_else(|| Error::unknown_room(target.clone()))?
                    .exit(direction.opposite());
                if back != Some(&room.id) {
                    return Err(Error::invalid_world(format!(
                        "exit {} {direction} to {target} has no return exit",
                        room.id
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Breadth-first traversal over exits, in canonical direction order.
pub(crate) fn breadth_first(rooms: &BTreeMap<RoomId, Room>, start: &RoomId) -> Vec<RoomId> {
    let mut order = Vec::new();
    if !rooms.contains_key(start) {
        return order;
    }
    let mut seen = BTreeSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start.clone());
    queue.push_back(start.clone());
    while let Some(id) = queue.pop_front() {
        if let Some(room) = rooms.get(&id) {
            for target in room.exits.values() {
                if seen.insert(target.clone()) {
                    queue.push_back(target.clone());
                }
            }
        }
        order.push(id);
    }
    order
}
