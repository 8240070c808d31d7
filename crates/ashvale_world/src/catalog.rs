//! The static content catalog.
//!
//! A [`Catalog`] bundles room templates, items, actors, loot tables, prayers,
//! and the structural [`WorldLayout`]. It is read-only once built and shared
//! behind an `Arc` by the generator, the engine, and the runtime.
//!
//! Every cross-reference is checked by [`Catalog::validate`]. A dangling id
//! is a configuration fault, reported before any session starts.

use std::collections::{BTreeMap, BTreeSet};

use ashvale_foundation::{ActorId, Error, ErrorKind, ItemId, LootTableId, Result, RoomId};

use crate::actor::{ActorKind, Enemy, Figure, Npc, humanize_id};
use crate::data;
use crate::item::Item;
use crate::layout::WorldLayout;
use crate::loot::LootTable;
use crate::template::RoomTemplate;

/// Static world content.
#[derive(Clone, Debug)]
pub struct Catalog {
    rooms: Vec<RoomTemplate>,
    items: BTreeMap<ItemId, Item>,
    enemies: BTreeMap<ActorId, Enemy>,
    npcs: BTreeMap<ActorId, Npc>,
    figures: BTreeMap<ActorId, Figure>,
    loot_tables: BTreeMap<LootTableId, LootTable>,
    prayers: BTreeMap<RoomId, String>,
    layout: WorldLayout,
    duplicates: Vec<String>,
}

impl Catalog {
    /// Creates an empty catalog around a layout.
    #[must_use]
    pub fn new(layout: WorldLayout) -> Self {
        Self {
            rooms: Vec::new(),
            items: BTreeMap::new(),
            enemies: BTreeMap::new(),
            npcs: BTreeMap::new(),
            figures: BTreeMap::new(),
            loot_tables: BTreeMap::new(),
            prayers: BTreeMap::new(),
            layout,
            duplicates: Vec::new(),
        }
    }

    /// Builds and validates the Ashen Vale content.
    ///
    /// # Errors
    ///
    /// Returns a configuration fault if the built-in tables are inconsistent.
    pub fn standard() -> Result<Self> {
        let mut catalog = Self::new(data::layout());
        for room in data::room_templates() {
            catalog = catalog.with_room(room);
        }
        for item in data::items() {
            catalog = catalog.with_item(item);
        }
        for table in data::loot_tables() {
            catalog = catalog.with_loot_table(table);
        }
        for enemy in data::enemies() {
            catalog = catalog.with_enemy(enemy);
        }
        for npc in data::npcs() {
            catalog = catalog.with_npc(npc);
        }
        for figure in data::figures() {
            catalog = catalog.with_figure(figure);
        }
        for (room, text) in data::prayers() {
            catalog = catalog.with_prayer(room, text);
        }
        catalog.validate()?;
        Ok(catalog)
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Adds a room template. Templates keep insertion order.
    #[must_use]
    pub fn with_room(mut self, room: RoomTemplate) -> Self {
        if self.rooms.iter().any(|r| r.id == room.id) {
            self.duplicates.push(format!("room {}", room.id));
        } else {
            self.rooms.push(room);
        }
        self
    }

    /// Adds an item.
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        if self.items.contains_key(&item.id) {
            self.duplicates.push(format!("item {}", item.id));
        } else {
            self.items.insert(item.id.clone(), item);
        }
        self
    }

    /// Adds an enemy.
    #[must_use]
    pub fn with_enemy(mut self, enemy: Enemy) -> Self {
        if self.actor_kind(&enemy.id).is_some() {
            self.duplicates.push(format!("actor {}", enemy.id));
        } else {
            self.enemies.insert(enemy.id.clone(), enemy);
        }
        self
    }

    /// Adds a villager.
    #[must_use]
    pub fn with_npc(mut self, npc: Npc) -> Self {
        if self.actor_kind(&npc.id).is_some() {
            self.duplicates.push(format!("actor {}", npc.id));
        } else {
            self.npcs.insert(npc.id.clone(), npc);
        }
        self
    }

    /// Adds a figure.
    #[must_use]
    pub fn with_figure(mut self, figure: Figure) -> Self {
        if self.actor_kind(&figure.id).is_some() {
            self.duplicates.push(format!("actor {}", figure.id));
        } else {
            self.figures.insert(figure.id.clone(), figure);
        }
        self
    }

    /// Adds a loot table.
    #[must_use]
    pub fn with_loot_table(mut self, table: LootTable) -> Self {
        if self.loot_tables.contains_key(&table.id) {
            self.duplicates.push(format!("loot table {}", table.id));
        } else {
            self.loot_tables.insert(table.id.clone(), table);
        }
        self
    }

    /// Sets the prayer response for a room.
    #[must_use]
    pub fn with_prayer(mut self, room: &str, text: &str) -> Self {
        self.prayers.insert(RoomId::new(room), text.to_string());
        self
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Room templates in declaration order.
    #[must_use]
    pub fn rooms(&self) -> &[RoomTemplate] {
        &self.rooms
    }

    /// Looks up a room template.
    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<&RoomTemplate> {
        self.rooms.iter().find(|room| &room.id == id)
    }

    /// Looks up an item.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// All items, ordered by id.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Looks up an enemy.
    #[must_use]
    pub fn enemy(&self, id: &str) -> Option<&Enemy> {
        self.enemies.get(id)
    }

    /// Looks up a villager.
    #[must_use]
    pub fn npc(&self, id: &str) -> Option<&Npc> {
        self.npcs.get(id)
    }

    /// Looks up a figure.
    #[must_use]
    pub fn figure(&self, id: &str) -> Option<&Figure> {
        self.figures.get(id)
    }

    /// Looks up a loot table.
    #[must_use]
    pub fn loot_table(&self, id: &LootTableId) -> Option<&LootTable> {
        self.loot_tables.get(id)
    }

    /// Room-specific prayer response.
    #[must_use]
    pub fn prayer(&self, room: &RoomId) -> Option<&str> {
        self.prayers.get(room).map(String::as_str)
    }

    /// The structural blueprint.
    #[must_use]
    pub fn layout(&self) -> &WorldLayout {
        &self.layout
    }

    /// Classifies an actor id.
    #[must_use]
    pub fn actor_kind(&self, id: &ActorId) -> Option<ActorKind> {
        if self.enemies.contains_key(id) {
            Some(ActorKind::Enemy)
        } else if self.npcs.contains_key(id) {
            Some(ActorKind::Npc)
        } else if self.figures.contains_key(id) {
            Some(ActorKind::Figure)
        } else {
            None
        }
    }

    /// Display name of any actor, falling back to a humanized id.
    #[must_use]
    pub fn actor_name(&self, id: &ActorId) -> String {
        if let Some(enemy) = self.enemies.get(id) {
            enemy.name.clone()
        } else if let Some(npc) = self.npcs.get(id) {
            npc.name.clone()
        } else if let Some(figure) = self.figures.get(id) {
            figure.name.clone()
        } else {
            humanize_id(id.as_str())
        }
    }

    /// Display name of an item, falling back to a humanized id.
    #[must_use]
    pub fn item_name(&self, id: &ItemId) -> String {
        self.items
            .get(id)
            .map_or_else(|| humanize_id(id.as_str()), |item| item.name.clone())
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Checks every cross-reference.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a duplicate id, a room item, room
    /// actor, loot entry, or loot table that does not resolve, a layout room
    /// that has no template, or a boss room missing its shard.
    pub fn validate(&self) -> Result<()> {
        if let Some(duplicate) = self.duplicates.first() {
            return Err(Error::invalid_world(format!("duplicate {duplicate}")));
        }

        for room in &self.rooms {
            for item in &room.items {
                if !self.items.contains_key(item) {
                    return Err(Error::unknown_item(item.clone()));
                }
            }
            for actor in &room.actors {
                if self.actor_kind(actor).is_none() {
                    return Err(Error::unknown_actor(actor.clone()));
                }
            }
        }

        for table in self.loot_tables.values() {
            for entry in &table.entries {
                if !self.items.contains_key(&entry.item) {
                    return Err(Error::unknown_item(entry.item.clone()));
                }
            }
        }

        for enemy in self.enemies.values() {
            if let Some(table) = &enemy.loot_table {
                if !self.loot_tables.contains_key(table) {
                    return Err(Error::new(ErrorKind::UnknownLootTable(table.clone())));
                }
            }
        }

        for npc in self.npcs.values() {
            if npc.dialogue.is_empty() {
                return Err(Error::invalid_world(format!("{} has no dialogue", npc.id)));
            }
        }

        let known: BTreeSet<&RoomId> = self.rooms.iter().map(|room| &room.id).collect();
        for room in self.layout.referenced_rooms() {
            if !known.contains(room) {
                return Err(Error::unknown_room(room.clone()));
            }
        }
        for room in self.prayers.keys() {
            if !known.contains(room) {
                return Err(Error::unknown_room(room.clone()));
            }
        }

        for boss in &self.layout.bosses {
            if !self.items.contains_key(&boss.shard) {
                return Err(Error::unknown_item(boss.shard.clone()));
            }
            let holds_shard = self
                .room(&boss.room)
                .is_some_and(|room| room.items.contains(&boss.shard));
            if !holds_shard {
                return Err(Error::invalid_world(format!(
                    "boss room {} does not hold {}",
                    boss.room, boss.shard
                )));
            }
        }
        if !self.items.contains_key(&self.layout.relic) {
            return Err(Error::unknown_item(self.layout.relic.clone()));
        }

        Ok(())
    }
}
