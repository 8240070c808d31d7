//! The per-session game state snapshot.
//!
//! `GameState` is a value: the reducer returns a new snapshot for every event
//! and `im` collections make each copy share structure with its predecessor.

use ashvale_foundation::{ActorId, BASE_STATS, ItemId, ItemSlot, RoomId, SessionId, Stats};
use im::{OrdMap, Vector};

use crate::fact::Fact;

// =============================================================================
// Encounter
// =============================================================================

/// Who acts next in an encounter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Initiative {
    /// The player swings next.
    #[default]
    Player,
    /// The enemy has just struck back.
    Enemy,
}

/// Lifecycle of an encounter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EncounterStatus {
    /// Fighting.
    #[default]
    Active,
    /// The enemy fell.
    Victory,
    /// The player fell.
    Defeat,
}

/// An in-progress fight against one enemy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encounter {
    /// The enemy being fought.
    pub enemy: ActorId,
    /// Its remaining hit points.
    pub enemy_hp: i32,
    /// Who acts next.
    pub initiative: Initiative,
    /// Lifecycle status.
    pub status: EncounterStatus,
}

impl Encounter {
    /// Returns true if this is an active fight against `enemy`.
    #[must_use]
    pub fn is_active_against(&self, enemy: &ActorId) -> bool {
        self.status == EncounterStatus::Active && &self.enemy == enemy
    }

    /// Applies a patch field by field.
    #[must_use]
    pub fn patched(mut self, patch: &EncounterPatch) -> Self {
        if let Some(enemy) = &patch.enemy {
            self.enemy = enemy.clone();
        }
        if let Some(hp) = patch.enemy_hp {
            self.enemy_hp = hp;
        }
        if let Some(initiative) = patch.initiative {
            self.initiative = initiative;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self
    }
}

/// Partial update of an [`Encounter`]. Omitted fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterPatch {
    /// New enemy id.
    pub enemy: Option<ActorId>,
    /// New enemy hit points.
    pub enemy_hp: Option<i32>,
    /// New initiative.
    pub initiative: Option<Initiative>,
    /// New status.
    pub status: Option<EncounterStatus>,
}

impl EncounterPatch {
    /// An empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the enemy.
    #[must_use]
    pub fn with_enemy(mut self, enemy: ActorId) -> Self {
        self.enemy = Some(enemy);
        self
    }

    /// Sets the enemy's hit points.
    #[must_use]
    pub fn with_enemy_hp(mut self, hp: i32) -> Self {
        self.enemy_hp = Some(hp);
        self
    }

    /// Sets the initiative.
    #[must_use]
    pub fn with_initiative(mut self, initiative: Initiative) -> Self {
        self.initiative = Some(initiative);
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn with_status(mut self, status: EncounterStatus) -> Self {
        self.status = Some(status);
        self
    }
}

// =============================================================================
// Game State
// =============================================================================

/// Everything that changes during one player's session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Owning session.
    pub session: SessionId,
    /// Current room.
    pub room: RoomId,
    /// Carried items in pickup order. Repeats mean quantity.
    pub inventory: Vector<ItemId>,
    /// Equipped item per slot.
    pub equipment: OrdMap<ItemSlot, ItemId>,
    /// Base stats, before equipment and buffs.
    pub stats: Stats,
    /// Boolean facts.
    pub flags: OrdMap<Fact, bool>,
    /// Narrative log, newest last.
    pub log: Vector<String>,
    /// The current fight, if any.
    pub encounter: Option<Encounter>,
}

impl GameState {
    /// A fresh state standing in `start` with base stats.
    #[must_use]
    pub fn new(session: SessionId, start: RoomId) -> Self {
        Self {
            session,
            room: start,
            inventory: Vector::new(),
            equipment: OrdMap::new(),
            stats: BASE_STATS,
            flags: OrdMap::new(),
            log: Vector::new(),
            encounter: None,
        }
    }

    /// Returns true if the fact is set.
    #[must_use]
    pub fn flag(&self, fact: &Fact) -> bool {
        self.flags.get(fact).copied().unwrap_or(false)
    }

    /// Returns true once hit points reach zero.
    #[must_use]
    pub fn is_fallen(&self) -> bool {
        self.stats.hp <= 0
    }

    /// Returns true once the relic has been reforged.
    #[must_use]
    pub fn is_victorious(&self) -> bool {
        self.flag(&Fact::Victory)
    }

    /// Returns true if at least one copy of the item is carried.
    #[must_use]
    pub fn has_item(&self, item: &ItemId) -> bool {
        self.inventory.contains(item)
    }

    /// Number of carried copies of the item.
    #[must_use]
    pub fn item_count(&self, item: &ItemId) -> usize {
        self.inventory.iter().filter(|held| *held == item).count()
    }

    /// Items whose one-shot buff is currently set.
    pub fn active_buffs(&self) -> impl Iterator<Item = &ItemId> {
        self.flags
            .iter()
            .filter(|(_, set)| **set)
            .filter_map(|(fact, _)| fact.buffed_item())
    }

    /// Slot currently holding the item, if equipped.
    #[must_use]
    pub fn slot_of(&self, item: &ItemId) -> Option<ItemSlot> {
        self.equipment
            .iter()
            .find(|(_, equipped)| *equipped == item)
            .map(|(slot, _)| *slot)
    }
}
