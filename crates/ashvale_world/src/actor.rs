//! Enemies, villagers, and other figures that populate rooms.

use ashvale_foundation::{ActorId, LootTableId, Stats};

/// A hostile actor that can be attacked.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    /// Unique id.
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Flavour text.
    pub description: String,
    /// Full-health stat block.
    pub stats: Stats,
    /// Loot rolled on defeat.
    pub loot_table: Option<LootTableId>,
}

impl Enemy {
    /// Creates an enemy with no loot.
    #[must_use]
    pub fn new(id: &str, name: &str, stats: Stats) -> Self {
        Self {
            id: ActorId::new(id),
            name: name.to_string(),
            description: String::new(),
            stats,
            loot_table: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Sets the loot table.
    #[must_use]
    pub fn with_loot(mut self, table: &str) -> Self {
        self.loot_table = Some(LootTableId::new(table));
        self
    }
}

/// A friendly villager with dialogue.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Npc {
    /// Unique id. Villager ids start with `villager`.
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Lines the villager may say.
    pub dialogue: Vec<String>,
}

impl Npc {
    /// Creates a villager with no lines.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: ActorId::new(id),
            name: name.to_string(),
            dialogue: Vec::new(),
        }
    }

    /// Adds a dialogue line.
    #[must_use]
    pub fn with_line(mut self, line: &str) -> Self {
        self.dialogue.push(line.to_string());
        self
    }
}

/// A silent presence: neither hostile nor talkative.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Figure {
    /// Unique id.
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Flavour text.
    pub description: String,
}

impl Figure {
    /// Creates a figure.
    #[must_use]
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: ActorId::new(id),
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// What kind of actor an id refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorKind {
    /// Can be attacked.
    Enemy,
    /// Can be talked to.
    Npc,
    /// Neither.
    Figure,
}

/// Turns `chapel-guard-1` into `Chapel Guard 1`.
#[must_use]
pub fn humanize_id(id: &str) -> String {
    id.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
