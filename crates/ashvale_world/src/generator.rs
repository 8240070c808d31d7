//! Seeded room-graph generation.
//!
//! [`MapGenerator::generate`] is a pure function of the session id. The id is
//! hashed to a 32-bit seed that drives a [`SeededRandom`] stream; the stream
//! decides chain orientation, hub directions, how many filler rooms sit
//! between the hub and each zone, and where the remaining filler rooms hang.
//!
//! Links never overwrite an occupied exit. A link that cannot be placed is
//! skipped and left to the repair pass, which reconnects unreachable boss
//! rooms (chain entry first, then the boss itself) and then any other
//! stranded room. Generation succeeds once every boss is reachable from the
//! hub; otherwise it retries on the same stream and finally reports
//! [`ErrorKind::GenerationFailed`].

use std::collections::BTreeMap;
use std::sync::Arc;

use ashvale_foundation::random::{choose, shuffle};
use ashvale_foundation::{
    Direction, Error, ErrorContext, ErrorKind, RandomSource, Result, RoomId, SeededRandom,
    SessionId, session_seed,
};
use tracing::{debug, trace, warn};

use crate::catalog::Catalog;
use crate::layout::LinkDirection;
use crate::room::{Room, RoomGraph, breadth_first};

/// Attempts made before generation gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Builds room graphs from a catalog.
#[derive(Clone, Debug)]
pub struct MapGenerator {
    catalog: Arc<Catalog>,
    max_attempts: usize,
}

impl MapGenerator {
    /// Creates a generator with the default attempt budget.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the attempt budget (at least one).
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// The catalog rooms are drawn from.
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// The attempt budget.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Generates the room graph for a session.
    ///
    /// # Errors
    ///
    /// Returns `GenerationFailed` if some boss room is still unreachable from
    /// the hub after every attempt.
    pub fn generate(&self, session: &SessionId) -> Result<RoomGraph> {
        let seed = session_seed(session);
        let mut random = SeededRandom::new(u64::from(seed));
        let mut unreachable = Vec::new();

        for attempt in 1..=self.max_attempts {
            let mut draft = Draft::new(&self.catalog);
            draft.lay_chains(&mut random);
            draft.connect_hub(&mut random);
            draft.connect_connectors(&mut random);
            draft.sprinkle_flavor(&mut random);
            unreachable = draft.repair();

            if unreachable.is_empty() {
                debug!(session = %session, seed, attempt, "room graph generated");
                return draft.finish();
            }
            warn!(
                session = %session,
                attempt,
                unreachable = ?unreachable,
                "boss rooms unreachable after repair, retrying"
            );
        }

        Err(Error::new(ErrorKind::GenerationFailed {
            session: session.clone(),
            unreachable,
            attempts: self.max_attempts,
        })
        .with_context(
            ErrorContext::new()
                .with_session(session.clone())
                .with_operation("room graph generation"),
        ))
    }
}

// =============================================================================
// Draft
// =============================================================================

/// A graph under construction for one attempt.
struct Draft<'a> {
    catalog: &'a Catalog,
    rooms: BTreeMap<RoomId, Room>,
    flavor: Vec<RoomId>,
}

impl<'a> Draft<'a> {
    fn new(catalog: &'a Catalog) -> Self {
        let rooms = catalog
            .rooms()
            .iter()
            .map(|template| (template.id.clone(), Room::from_template(template)))
            .collect();
        let flavor = catalog
            .rooms()
            .iter()
            .filter(|template| template.is_flavor())
            .map(|template| template.id.clone())
            .collect();
        Self {
            catalog,
            rooms,
            flavor,
        }
    }

    /// Adds `from --direction--> to` and the return exit, if both slots are free.
    fn link(&mut self, from: &RoomId, direction: Direction, to: &RoomId) -> bool {
        if from == to {
            return false;
        }
        let from_free = self
            .rooms
            .get(from)
            .is_some_and(|room| !room.exits.contains_key(&direction));
        let to_free = self
            .rooms
            .get(to)
            .is_some_and(|room| !room.exits.contains_key(&direction.opposite()));
        if !from_free || !to_free {
            trace!(%from, %direction, %to, "link slot occupied");
            return false;
        }
        if let Some(room) = self.rooms.get_mut(from) {
            room.exits.insert(direction, to.clone());
        }
        if let Some(room) = self.rooms.get_mut(to) {
            room.exits.insert(direction.opposite(), from.clone());
        }
        true
    }

    fn free(&self, id: &RoomId, candidates: &[Direction]) -> Vec<Direction> {
        self.rooms
            .get(id)
            .map(|room| room.free_directions(candidates))
            .unwrap_or_default()
    }

    fn adjacent(&self, a: &RoomId, b: &RoomId) -> bool {
        self.rooms
            .get(a)
            .is_some_and(|room| room.exits.values().any(|target| target == b))
    }

    fn take_flavor(&mut self, random: &mut dyn RandomSource) -> Option<RoomId> {
        if self.flavor.is_empty() {
            return None;
        }
        let index = random.next_index(self.flavor.len());
        Some(self.flavor.remove(index))
    }

    fn reachable(&self) -> Vec<RoomId> {
        breadth_first(&self.rooms, &self.catalog.layout().hub)
    }

    /// Chains first: fixed directions, plus one east/west draw per oriented chain.
    fn lay_chains(&mut self, random: &mut dyn RandomSource) {
        let catalog = self.catalog;
        for chain in &catalog.layout().chains {
            let horizontal = if chain.is_oriented() && random.next_f64() >= 0.5 {
                Direction::West
            } else {
                Direction::East
            };
            for link in &chain.links {
                let direction = match link.direction {
                    LinkDirection::Fixed(direction) => direction,
                    LinkDirection::Horizontal => horizontal,
                };
                if !self.link(&link.from, direction, &link.to) {
                    debug!(chain = %chain.name, from = %link.from, to = %link.to, "chain link skipped");
                }
            }
        }
    }

    /// Hub to each zone entry through zero or more filler rooms.
    fn connect_hub(&mut self, random: &mut dyn RandomSource) {
        let catalog = self.catalog;
        let layout = catalog.layout();
        let mut directions = Direction::CARDINAL.to_vec();
        shuffle(random, &mut directions);

        for (index, entry) in layout.zone_entries.iter().enumerate() {
            let preferred = directions[index % directions.len()];
            let count = random.next_index(layout.max_interposed + 1);
            let mut previous = layout.hub.clone();

            for step in 0..count {
                let free = self.free(&previous, &Direction::CARDINAL);
                if free.is_empty() {
                    break;
                }
                let Some(flavor) = self.take_flavor(random) else {
                    break;
                };
                let direction = if step == 0 && free.contains(&preferred) {
                    preferred
                } else {
                    match choose(random, &free) {
                        Some(direction) => *direction,
                        None => preferred,
                    }
                };
                if self.link(&previous, direction, &flavor) {
                    previous = flavor;
                } else {
                    self.flavor.push(flavor);
                    break;
                }
            }

            if !self.connect(&previous, entry, Some(preferred), random) {
                debug!(from = %previous, to = %entry, "zone entry left for repair");
            }
        }
    }

    fn connect_connectors(&mut self, random: &mut dyn RandomSource) {
        let catalog = self.catalog;
        for (from, to) in &catalog.layout().connectors {
            if !self.connect(from, to, None, random) {
                debug!(%from, %to, "connector left for repair");
            }
        }
    }

    /// Links two rooms: preferred direction, else a random compatible
    /// cardinal pair, else a random compatible pair in any direction.
    fn connect(
        &mut self,
        a: &RoomId,
        b: &RoomId,
        preferred: Option<Direction>,
        random: &mut dyn RandomSource,
    ) -> bool {
        if a == b {
            return false;
        }
        if self.adjacent(a, b) {
            return true;
        }
        if let Some(direction) = preferred {
            let a_free = self.free(a, &[direction]);
            let b_free = self.free(b, &[direction.opposite()]);
            if !a_free.is_empty() && !b_free.is_empty() {
                return self.link(a, direction, b);
            }
        }
        for pool in [Direction::CARDINAL.as_slice(), Direction::ALL.as_slice()] {
            let b_free = self.free(b, pool);
            let compatible: Vec<Direction> = self
                .free(a, pool)
                .into_iter()
                .filter(|direction| b_free.contains(&direction.opposite()))
                .collect();
            if let Some(direction) = choose(random, &compatible).copied() {
                return self.link(a, direction, b);
            }
        }
        false
    }

    /// Hangs every unused filler room off a random reachable room.
    fn sprinkle_flavor(&mut self, random: &mut dyn RandomSource) {
        let catalog = self.catalog;
        let layout = catalog.layout();
        let mut candidates: Vec<RoomId> = self
            .reachable()
            .into_iter()
            .filter(|id| layout.accepts_branches(id))
            .collect();

        while !self.flavor.is_empty() && !candidates.is_empty() {
            let index = random.next_index(candidates.len());
            let attach = candidates[index].clone();
            let free = self.free(&attach, &Direction::CARDINAL);
            if free.is_empty() {
                candidates.remove(index);
                continue;
            }
            let Some(flavor) = self.take_flavor(random) else {
                break;
            };
            let flavor_free = self.free(&flavor, &Direction::CARDINAL);
            let open: Vec<Direction> = free
                .into_iter()
                .filter(|direction| flavor_free.contains(&direction.opposite()))
                .collect();
            let Some(direction) = choose(random, &open).copied() else {
                debug!(room = %flavor, "filler room left for repair");
                continue;
            };
            if self.link(&attach, direction, &flavor)
                && layout.accepts_branches(&flavor)
                && !candidates.contains(&flavor)
            {
                candidates.push(flavor);
            }
        }
    }

    /// Reconnects unreachable rooms. Returns the boss rooms still unreachable.
    fn repair(&mut self) -> Vec<RoomId> {
        let catalog = self.catalog;
        let layout = catalog.layout();

        for boss in &layout.bosses {
            let reachable = self.reachable();
            if reachable.contains(&boss.room) {
                continue;
            }
            if boss.entry != boss.room
                && !reachable.contains(&boss.entry)
                && self.attach_to_reachable(&boss.entry, &reachable)
            {
                debug!(entry = %boss.entry, boss = %boss.room, "repaired chain entry");
                if self.reachable().contains(&boss.room) {
                    continue;
                }
            }
            let reachable = self.reachable();
            if self.attach_to_reachable(&boss.room, &reachable) {
                debug!(boss = %boss.room, "repaired boss room directly");
            }
        }

        for template in catalog.rooms() {
            let reachable = self.reachable();
            if !reachable.contains(&template.id) && !self.attach_to_reachable(&template.id, &reachable) {
                debug!(room = %template.id, "room left unreachable");
            }
        }

        let reachable = self.reachable();
        layout
            .bosses
            .iter()
            .filter(|boss| !reachable.contains(&boss.room))
            .map(|boss| boss.room.clone())
            .collect()
    }

    /// First compatible pair wins: reachable rooms in breadth-first order,
    /// directions in canonical order.
    fn attach_to_reachable(&mut self, id: &RoomId, reachable: &[RoomId]) -> bool {
        let own_free = self.free(id, &Direction::ALL);
        if own_free.is_empty() {
            return false;
        }
        for other in reachable {
            if other == id {
                continue;
            }
            let other_free = self.free(other, &Direction::ALL);
            for direction in &own_free {
                if other_free.contains(&direction.opposite()) {
                    return self.link(id, *direction, other);
                }
            }
        }
        false
    }

    fn finish(self) -> Result<RoomGraph> {
        RoomGraph::new(self.catalog.layout().hub.clone(), self.rooms)
    }
}
