//! What the player can perceive right now.

use ashvale_foundation::{ActorId, Direction, ItemId, ItemSlot, Result, RoomId};
use ashvale_world::{Room, RoomGraph};
use im::{OrdMap, Vector};

use crate::fact::Fact;
use crate::state::GameState;

/// A derived view of the current room and the player's belongings.
///
/// Always recomputed from state; never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleContext {
    /// Current room id.
    pub room: RoomId,
    /// Current room name.
    pub room_name: String,
    /// Current room description.
    pub room_description: String,
    /// Exit directions in canonical order.
    pub exits: Vec<Direction>,
    /// Room items not yet taken.
    pub items: Vec<ItemId>,
    /// Room actors not yet defeated.
    pub actors: Vec<ActorId>,
    /// Carried items.
    pub inventory: Vector<ItemId>,
    /// Equipped items.
    pub equipment: OrdMap<ItemSlot, ItemId>,
    /// All facts.
    pub flags: OrdMap<Fact, bool>,
}

/// Room items the state has not flagged as taken.
#[must_use]
pub fn visible_items(room: &Room, state: &GameState) -> Vec<ItemId> {
    room.items
        .iter()
        .filter(|item| !state.flag(&Fact::ItemTaken((*item).clone())))
        .cloned()
        .collect()
}

/// Room actors the state has not flagged as defeated.
#[must_use]
pub fn visible_actors(room: &Room, state: &GameState) -> Vec<ActorId> {
    room.actors
        .iter()
        .filter(|actor| !state.flag(&Fact::EnemyDefeated((*actor).clone())))
        .cloned()
        .collect()
}

/// Builds the visible context for the state's current room.
///
/// # Errors
///
/// Returns `UnknownRoom` if the state stands in a room the graph lacks.
pub fn resolve_visible_context(state: &GameState, graph: &RoomGraph) -> Result<VisibleContext> {
    let room = graph.expect_room(&state.room)?;
    Ok(VisibleContext {
        room: room.id.clone(),
        room_name: room.name.clone(),
        room_description: room.description.clone(),
        exits: room.exit_directions(),
        items: visible_items(room, state),
        actors: visible_actors(room, state),
        inventory: state.inventory.clone(),
        equipment: state.equipment.clone(),
        flags: state.flags.clone(),
    })
}
