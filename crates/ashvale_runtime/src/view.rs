//! The client-facing projection of a session.
//!
//! Built fresh after every command. Inventory is grouped by display name
//! with equipped copies hidden; every equipment slot is listed, filled or
//! not; stats are effective stats.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use ashvale_engine::{GameState, effective_stats, visibility::visible_actors};
use ashvale_foundation::{ActorId, Direction, ItemId, ItemSlot, Stats, StatsDelta};
use ashvale_world::{ActorKind, Catalog, RoomGraph};
use serde::{Deserialize, Serialize};

/// Items sharing a display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryGroup {
    /// Display name.
    pub name: String,
    /// Unequipped copies carried.
    pub quantity: usize,
    /// Whether any copy can be equipped.
    pub equipable: bool,
}

/// One equipment slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquippedView {
    /// The slot.
    pub slot: ItemSlot,
    /// Equipped item, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<ItemId>,
    /// Its display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// How an actor regards the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// Will fight.
    Hostile,
    /// Will not.
    Friendly,
}

/// A visible actor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorView {
    /// Actor id.
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Hostile enemy or friendly figure.
    pub disposition: Disposition,
}

/// Everything a client needs to render the player's situation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientView {
    /// Carried items grouped by name, sorted by name.
    pub inventory_groups: Vec<InventoryGroup>,
    /// All five slots in canonical order.
    pub equipment: Vec<EquippedView>,
    /// Base stats plus equipment and buffs.
    pub effective_stats: Stats,
    /// Change caused by the last command, when it could change stats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_delta: Option<StatsDelta>,
    /// Current room name.
    pub location_name: String,
    /// Exits from the current room.
    pub exits: Vec<Direction>,
    /// The session's whole map.
    pub room_graph: Arc<RoomGraph>,
    /// Actors in the room not yet defeated.
    pub visible_actors: Vec<ActorView>,
}

impl ClientView {
    /// Projects `state` onto its session's room graph.
    #[must_use]
    pub fn build(state: &GameState, graph: &Arc<RoomGraph>, catalog: &Catalog) -> Self {
        let room = graph.room(&state.room);
        Self {
            inventory_groups: inventory_groups(state, catalog),
            equipment: equipment(state, catalog),
            effective_stats: effective_stats(state, catalog),
            stat_delta: None,
            location_name: room.map_or_else(|| state.room.to_string(), |room| room.name.clone()),
            exits: room.map(ashvale_world::Room::exit_directions).unwrap_or_default(),
            room_graph: Arc::clone(graph),
            visible_actors: room
                .map(|room| visible_actors(room, state))
                .unwrap_or_default()
                .into_iter()
                .map(|id| actor_view(id, catalog))
                .collect(),
        }
    }

    /// Attaches a stat delta.
    #[must_use]
    pub fn with_stat_delta(mut self, delta: StatsDelta) -> Self {
        self.stat_delta = Some(delta);
        self
    }
}

fn inventory_groups(state: &GameState, catalog: &Catalog) -> Vec<InventoryGroup> {
    let mut equipped: HashMap<&ItemId, usize> = HashMap::new();
    for id in state.equipment.values() {
        *equipped.entry(id).or_default() += 1;
    }

    let mut groups: BTreeMap<String, InventoryGroup> = BTreeMap::new();
    for id in &state.inventory {
        if let Some(hidden) = equipped.get_mut(id).filter(|remaining| **remaining > 0) {
            *hidden -= 1;
            continue;
        }
        let name = catalog.item_name(id);
        let equipable = catalog.item(id.as_str()).is_some_and(|item| item.slot.is_some());
        groups
            .entry(name.clone())
            .and_modify(|group| {
                group.quantity += 1;
                group.equipable |= equipable;
            })
            .or_insert(InventoryGroup {
                name,
                quantity: 1,
                equipable,
            });
    }
    groups.into_values().collect()
}

fn equipment(state: &GameState, catalog: &Catalog) -> Vec<EquippedView> {
    ItemSlot::ALL
        .into_iter()
        .map(|slot| {
            let item_id = state.equipment.get(&slot).cloned();
            let name = item_id.as_ref().map(|id| catalog.item_name(id));
            EquippedView { slot, item_id, name }
        })
        .collect()
}

fn actor_view(id: ActorId, catalog: &Catalog) -> ActorView {
    let disposition = match catalog.actor_kind(&id) {
        Some(ActorKind::Enemy) => Disposition::Hostile,
        _ => Disposition::Friendly,
    };
    ActorView {
        name: catalog.actor_name(&id),
        id,
        disposition,
    }
}
