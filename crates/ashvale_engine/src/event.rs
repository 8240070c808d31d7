//! State-transition events.
//!
//! Handlers describe every effect as an [`Event`]; the reducer is the only
//! code that turns events into a new [`GameState`](crate::GameState).
//!
//! On the wire an event is `{"kind": ..., "payload": ...}`. A kind this build
//! does not know, whatever its payload, reads back as [`Event::Unknown`].

use ashvale_foundation::{ActorId, ItemId, ItemSlot, RoomId, StatsDelta};

use crate::fact::Fact;
use crate::state::EncounterPatch;

/// A single state transition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "payload", rename_all = "camelCase")
)]
pub enum Event {
    /// Walk to another room. Drops any encounter.
    Move {
        /// Room left.
        from: RoomId,
        /// Room entered.
        to: RoomId,
    },
    /// Add one copy of an item to the inventory.
    GiveItem {
        /// Item added.
        item: ItemId,
    },
    /// Remove the first carried copy of an item.
    RemoveItem {
        /// Item removed.
        item: ItemId,
    },
    /// Put an item in a slot, replacing any occupant.
    Equip {
        /// Slot filled.
        slot: ItemSlot,
        /// Item equipped.
        item: ItemId,
    },
    /// Empty a slot.
    Unequip {
        /// Slot emptied.
        slot: ItemSlot,
    },
    /// Hurt the enemy of the active encounter.
    Damage {
        /// Enemy hit. Ignored unless it matches the encounter.
        target: ActorId,
        /// Hit points removed.
        amount: i32,
    },
    /// Hurt the player.
    PlayerDamage {
        /// Hit points removed.
        amount: i32,
    },
    /// Heal the player, up to base max.
    PlayerHeal {
        /// Hit points restored.
        amount: i32,
    },
    /// Adjust any subset of the player's base stats.
    AdjustStats(StatsDelta),
    /// Mark the encounter's enemy as beaten.
    Defeat {
        /// Enemy beaten. Ignored unless it matches the encounter.
        target: ActorId,
    },
    /// Mark the encounter as lost.
    PlayerDefeated,
    /// Set a fact.
    SetFlag {
        /// Fact key.
        fact: Fact,
        /// New value.
        value: bool,
    },
    /// Append a narrative line.
    AppendLog {
        /// The line.
        line: String,
    },
    /// Patch the encounter, or clear it with `None`.
    UpdateEncounter(Option<EncounterPatch>),
    /// An event kind this build does not know. Applying it changes nothing.
    Unknown,
}

impl Event {
    /// `AppendLog` shorthand.
    #[must_use]
    pub fn log(line: impl Into<String>) -> Self {
        Event::AppendLog { line: line.into() }
    }

    /// `SetFlag` shorthand.
    #[must_use]
    pub fn flag(fact: Fact, value: bool) -> Self {
        Event::SetFlag { fact, value }
    }

    /// `UpdateEncounter(Some(patch))` shorthand.
    #[must_use]
    pub fn encounter(patch: EncounterPatch) -> Self {
        Event::UpdateEncounter(Some(patch))
    }

    /// The wire name of this event kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Move { .. } => "move",
            Event::GiveItem { .. } => "giveItem",
            Event::RemoveItem { .. } => "removeItem",
            Event::Equip { .. } => "equip",
            Event::Unequip { .. } => "unequip",
            Event::Damage { .. } => "damage",
            Event::PlayerDamage { .. } => "playerDamage",
            Event::PlayerHeal { .. } => "playerHeal",
            Event::AdjustStats(_) => "adjustStats",
            Event::Defeat { .. } => "defeat",
            Event::PlayerDefeated => "playerDefeated",
            Event::SetFlag { .. } => "setFlag",
            Event::AppendLog { .. } => "appendLog",
            Event::UpdateEncounter(_) => "updateEncounter",
            Event::Unknown => "unknown",
        }
    }
}

#[cfg(feature = "serde")]
mod wire {
    use serde::de::{Error as _, IgnoredAny};
    use serde::{Deserialize, Deserializer};

    use super::{ActorId, EncounterPatch, Event, Fact, ItemId, ItemSlot, RoomId, StatsDelta};

    /// Kinds with a payload shape known to this build.
    const KNOWN_KINDS: [&str; 14] = [
        "move",
        "giveItem",
        "removeItem",
        "equip",
        "unequip",
        "damage",
        "playerDamage",
        "playerHeal",
        "adjustStats",
        "defeat",
        "playerDefeated",
        "setFlag",
        "appendLog",
        "updateEncounter",
    ];

    #[allow(dead_code)]
    #[derive(Deserialize)]
    #[serde(remote = "Event", tag = "kind", content = "payload", rename_all = "camelCase")]
    enum KnownEvent {
        Move { from: RoomId, to: RoomId },
        GiveItem { item: ItemId },
        RemoveItem { item: ItemId },
        Equip { slot: ItemSlot, item: ItemId },
        Unequip { slot: ItemSlot },
        Damage { target: ActorId, amount: i32 },
        PlayerDamage { amount: i32 },
        PlayerHeal { amount: i32 },
        AdjustStats(StatsDelta),
        Defeat { target: ActorId },
        PlayerDefeated,
        SetFlag { fact: Fact, value: bool },
        AppendLog { line: String },
        UpdateEncounter(Option<EncounterPatch>),
    }

    #[allow(dead_code)]
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Known(#[serde(with = "KnownEvent")] Event),
        Other {
            kind: String,
            #[serde(default)]
            payload: Option<IgnoredAny>,
        },
    }

    impl<'de> Deserialize<'de> for Event {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            match Wire::deserialize(deserializer)? {
                Wire::Known(event) => Ok(event),
                Wire::Other { kind, .. } if KNOWN_KINDS.contains(&kind.as_str()) => Err(
                    D::Error::custom(format!("malformed payload for event kind `{kind}`")),
                ),
                Wire::Other { .. } => Ok(Event::Unknown),
            }
        }
    }

}
