//! Verb handlers, grouped by module.
//!
//! Handlers are plain functions. They read the state, command, and context
//! and return a [`CommandResult`](crate::CommandResult); any player mistake
//! becomes a zero-event result with explanatory text.

pub mod combat;
pub mod core;
pub mod items;
pub mod map;

use ashvale_foundation::{ItemId, Result};
use ashvale_world::{Catalog, Item, Room};

use crate::registry::Registry;
use crate::state::GameState;
use crate::visibility::{visible_actors, visible_items};

/// Registers the map, items, combat, and core modules.
///
/// # Errors
///
/// Returns `DuplicateVerb` if any verb is claimed twice.
pub fn register_all(registry: &mut Registry) -> Result<()> {
    map::register(registry)?;
    items::register(registry)?;
    combat::register(registry)?;
    core::register(registry)?;
    Ok(())
}

/// The full description shown by `look` and on arrival.
#[must_use]
pub fn describe_room(room: &Room, state: &GameState, catalog: &Catalog) -> String {
    let items: Vec<String> = visible_items(room, state)
        .iter()
        .map(|id| catalog.item_name(id))
        .collect();
    let actors: Vec<String> = visible_actors(room, state)
        .iter()
        .map(|id| catalog.actor_name(id))
        .collect();

    let mut parts = vec![
        format!("{}.", room.name),
        room.description.clone(),
        format!("{}.", room.exit_summary()),
    ];
    if items.is_empty() {
        parts.push("No items of note.".to_string());
    } else {
        parts.push(format!("Items: {}.", items.join(", ")));
    }
    if !actors.is_empty() {
        parts.push(format!("Figures: {}.", actors.join(", ")));
    }
    parts.join(" ").trim().to_string()
}

/// How well a query names an item. Lower is better.
fn match_rank(item: &Item, query: &str) -> Option<u8> {
    let id = item.id.as_str().to_lowercase();
    let name = item.name.to_lowercase();
    let spaced_id = id.replace('-', " ");
    if id == query {
        Some(0)
    } else if name == query || spaced_id == query {
        Some(1)
    } else if name.split_whitespace().any(|word| word == query) {
        Some(2)
    } else if name.contains(query) || id.contains(query) || spaced_id.contains(query) {
        Some(3)
    } else {
        None
    }
}

/// Best-matching item among `candidates`; ties go to the earliest candidate.
pub(crate) fn best_match<'c, 'i>(
    candidates: impl IntoIterator<Item = &'i ItemId>,
    catalog: &'c Catalog,
    query: &str,
    accept: impl Fn(&Item) -> bool,
) -> Option<&'c Item> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    let mut best: Option<(u8, &Item)> = None;
    for id in candidates {
        let Some(item) = catalog.item(id.as_str()) else {
            continue;
        };
        if !accept(item) {
            continue;
        }
        if let Some(rank) = match_rank(item, &query) {
            if best.is_none_or(|(current, _)| rank < current) {
                best = Some((rank, item));
            }
        }
    }
    best.map(|(_, item)| item)
}
