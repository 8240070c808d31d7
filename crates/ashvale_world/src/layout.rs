//! The structural blueprint the generator lays rooms out from.
//!
//! Chains, zone entries, and boss rooms are game-design constants. Only
//! orientation, hub directions, filler placement, and side branches vary
//! per session.

use ashvale_foundation::{Direction, ItemId, RoomId};

use crate::template::RoomChain;

/// Direction of a chain link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkDirection {
    /// Always this direction.
    Fixed(Direction),
    /// East or west, drawn once per chain and shared by all its horizontal links.
    Horizontal,
}

/// A fixed link inside a chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainLink {
    /// Room the exit leaves from.
    pub from: RoomId,
    /// Direction of the exit on `from`.
    pub direction: LinkDirection,
    /// Room the exit leads to.
    pub to: RoomId,
}

/// A named sequence of rooms with fixed internal connectivity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
    /// Which chain this is.
    pub name: RoomChain,
    /// Links laid down in order.
    pub links: Vec<ChainLink>,
}

impl Chain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new(name: RoomChain) -> Self {
        Self {
            name,
            links: Vec::new(),
        }
    }

    /// Adds a link in a fixed direction.
    #[must_use]
    pub fn fixed(mut self, from: &str, direction: Direction, to: &str) -> Self {
        self.links.push(ChainLink {
            from: RoomId::new(from),
            direction: LinkDirection::Fixed(direction),
            to: RoomId::new(to),
        });
        self
    }

    /// Adds a link whose east/west orientation is randomized.
    #[must_use]
    pub fn horizontal(mut self, from: &str, to: &str) -> Self {
        self.links.push(ChainLink {
            from: RoomId::new(from),
            direction: LinkDirection::Horizontal,
            to: RoomId::new(to),
        });
        self
    }

    /// Returns true if any link needs an orientation draw.
    #[must_use]
    pub fn is_oriented(&self) -> bool {
        self.links
            .iter()
            .any(|link| link.direction == LinkDirection::Horizontal)
    }
}

/// A boss room that must be reachable from the hub.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BossRoom {
    /// The boss room itself.
    pub room: RoomId,
    /// Entry room of the boss's chain, tried first during repair.
    pub entry: RoomId,
    /// Quest shard the room must hold.
    pub shard: ItemId,
}

/// The full structural blueprint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldLayout {
    /// Starting room.
    pub hub: RoomId,
    /// Chains, laid down before anything else.
    pub chains: Vec<Chain>,
    /// Rooms the hub connects to, one per shuffled cardinal direction.
    pub zone_entries: Vec<RoomId>,
    /// Extra room-to-room connections made after the hub links.
    pub connectors: Vec<(RoomId, RoomId)>,
    /// Rooms that must be reachable for generation to succeed.
    pub bosses: Vec<BossRoom>,
    /// Rooms that never receive side branches, besides the bosses.
    pub sealed: Vec<RoomId>,
    /// Item forged from every boss shard.
    pub relic: ItemId,
    /// Most filler rooms interposed between the hub and one zone entry.
    pub max_interposed: usize,
}

impl WorldLayout {
    /// Creates a layout with only a hub.
    #[must_use]
    pub fn new(hub: &str, relic: &str) -> Self {
        Self {
            hub: RoomId::new(hub),
            chains: Vec::new(),
            zone_entries: Vec::new(),
            connectors: Vec::new(),
            bosses: Vec::new(),
            sealed: Vec::new(),
            relic: ItemId::new(relic),
            max_interposed: 2,
        }
    }

    /// Adds a chain.
    #[must_use]
    pub fn with_chain(mut self, chain: Chain) -> Self {
        self.chains.push(chain);
        self
    }

    /// Adds a zone entry.
    #[must_use]
    pub fn with_zone_entry(mut self, room: &str) -> Self {
        self.zone_entries.push(RoomId::new(room));
        self
    }

    /// Adds a connector.
    #[must_use]
    pub fn with_connector(mut self, from: &str, to: &str) -> Self {
        self.connectors.push((RoomId::new(from), RoomId::new(to)));
        self
    }

    /// Adds a required boss room.
    #[must_use]
    pub fn with_boss(mut self, room: &str, entry: &str, shard: &str) -> Self {
        self.bosses.push(BossRoom {
            room: RoomId::new(room),
            entry: RoomId::new(entry),
            shard: ItemId::new(shard),
        });
        self
    }

    /// Marks a room as closed to side branches.
    #[must_use]
    pub fn with_sealed(mut self, room: &str) -> Self {
        self.sealed.push(RoomId::new(room));
        self
    }

    /// Sets how many filler rooms may sit between the hub and an entry.
    #[must_use]
    pub fn with_max_interposed(mut self, max: usize) -> Self {
        self.max_interposed = max;
        self
    }

    /// Quest shards in boss order.
    pub fn shards(&self) -> impl Iterator<Item = &ItemId> {
        self.bosses.iter().map(|boss| &boss.shard)
    }

    /// Returns true if `room` is a required boss room.
    #[must_use]
    pub fn is_boss(&self, room: &RoomId) -> bool {
        self.bosses.iter().any(|boss| &boss.room == room)
    }

    /// Returns true if side branches may attach to `room`.
    #[must_use]
    pub fn accepts_branches(&self, room: &RoomId) -> bool {
        !self.is_boss(room) && !self.sealed.contains(room)
    }

    /// Every room id the layout refers to.
    #[must_use]
    pub fn referenced_rooms(&self) -> Vec<&RoomId> {
        let mut rooms = vec![&self.hub];
        for chain in &self.chains {
            for link in &chain.links {
                rooms.push(&link.from);
                rooms.push(&link.to);
            }
        }
        rooms.extend(self.zone_entries.iter());
        for (from, to) in &self.connectors {
            rooms.push(from);
            rooms.push(to);
        }
        for boss in &self.bosses {
            rooms.push(&boss.room);
            rooms.push(&boss.entry);
        }
        rooms.extend(self.sealed.iter());
        rooms
    }
}
