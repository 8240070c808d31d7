//! Inventory and equipment: `take`, `use`, `combine`, `equip`, `unequip`,
//! `inventory`.

use ashvale_foundation::{ItemSlot, Result};
use ashvale_world::{ActorKind, Catalog, Item};

use crate::command::{Command, CommandResult, Verb};
use crate::dispatcher::CommandContext;
use crate::event::Event;
use crate::fact::Fact;
use crate::handlers::best_match;
use crate::registry::{Module, Registry};
use crate::state::GameState;

/// Registers the item verbs.
///
/// # Errors
///
/// Returns `DuplicateVerb` if another module already claimed one of them.
pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(Module::Items, Verb::Take, take)?;
    registry.register(Module::Items, Verb::Use, use_item)?;
    registry.register(Module::Items, Verb::Combine, combine)?;
    registry.register(Module::Items, Verb::Equip, equip)?;
    registry.register(Module::Items, Verb::Unequip, unequip)?;
    registry.register(Module::Items, Verb::Inventory, inventory)?;
    Ok(())
}

/// Picks up a room item.
pub fn take(state: &GameState, command: &Command, ctx: &mut CommandContext<'_>) -> CommandResult {
    let hostile = ctx
        .visible
        .actors
        .iter()
        .any(|actor| ctx.catalog.actor_kind(actor) == Some(ActorKind::Enemy));
    if hostile {
        return CommandResult::message("A hostile presence keeps you from scavenging.");
    }
    let Some(query) = command.object() else {
        return CommandResult::message("What would you like to take?");
    };

    // Search every room item, taken or not, so a second take can say so.
    let Some(room) = ctx.graph.room(&state.room) else {
        return CommandResult::message("There is nothing like that to take.");
    };
    let Some(item) = best_match(&room.items, ctx.catalog, query, |_| true) else {
        return CommandResult::message("There is nothing like that to take.");
    };
    let fact = Fact::ItemTaken(item.id.clone());
    if state.flag(&fact) {
        return CommandResult::message("You already claimed that.");
    }

    let text = format!("You take the {}.", item.name);
    CommandResult::new(
        text.clone(),
        vec![
            Event::GiveItem {
                item: item.id.clone(),
            },
            Event::flag(fact, true),
            Event::log(text),
        ],
    )
}

/// Consumes an item. Naming any shard attempts to fuse all of them.
pub fn use_item(state: &GameState, command: &Command, ctx: &mut CommandContext<'_>) -> CommandResult {
    let Some(query) = command.object() else {
        return CommandResult::message("What would you like to use?");
    };
    let catalog = ctx.catalog;
    let Some(mut item) = best_match(&state.inventory, catalog, query, |_| true) else {
        return CommandResult::message("You do not carry that.");
    };
    if is_shard(catalog, item) {
        return fuse_shards(state, catalog, Fusion::Use);
    }
    if !item.is_consumable() {
        if let Some(consumable) = best_match(&state.inventory, catalog, query, Item::is_consumable) {
            item = consumable;
        }
    }
    if !item.is_consumable() {
        return CommandResult::message(format!("The {} cannot be used that way.", item.name));
    }

    let text = format!("You use the {}.", item.name);
    CommandResult::new(
        text.clone(),
        vec![
            Event::RemoveItem {
                item: item.id.clone(),
            },
            Event::log(text),
            Event::flag(Fact::ItemBuff(item.id.clone()), true),
        ],
    )
}

/// Fuses the shards into the relic.
pub fn combine(state: &GameState, _command: &Command, ctx: &mut CommandContext<'_>) -> CommandResult {
    fuse_shards(state, ctx.catalog, Fusion::Combine)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Fusion {
    Use,
    Combine,
}

fn is_shard(catalog: &Catalog, item: &Item) -> bool {
    catalog.layout().shards().any(|shard| shard == &item.id)
}

fn fuse_shards(state: &GameState, catalog: &Catalog, fusion: Fusion) -> CommandResult {
    let layout = catalog.layout();
    let total = layout.bosses.len();
    let held = layout.shards().filter(|shard| state.has_item(shard)).count();

    if held == 0 {
        return CommandResult::logged("You have no bell shards to combine.");
    }
    if held < total {
        return CommandResult::logged(format!(
            "You have {held}/{total} bell shards. Keep searching."
        ));
    }

    let relic = catalog.item_name(&layout.relic);
    let mut events: Vec<Event> = layout
        .shards()
        .map(|shard| Event::RemoveItem { item: shard.clone() })
        .collect();
    events.push(Event::GiveItem {
        item: layout.relic.clone(),
    });
    let text = match fusion {
        Fusion::Use => {
            let text = "The shards fuse with a resonant hum. The clapper is whole once more; you have won.";
            events.push(Event::log(text));
            text.to_string()
        }
        Fusion::Combine => {
            let forged = "You set each shard into place. Heat blooms, seams vanish. The Great Bell's clapper is reforged.";
            let holding = format!("You hold {relic}. The Night recoils.");
            events.push(Event::log(forged));
            events.push(Event::log(holding.clone()));
            format!("{forged} {holding}")
        }
    };
    events.push(Event::flag(Fact::Victory, true));
    CommandResult::new(text, events)
}

/// Equips a carried item.
pub fn equip(state: &GameState, command: &Command, ctx: &mut CommandContext<'_>) -> CommandResult {
    let Some(query) = command.object() else {
        return CommandResult::message("What would you like to equip?");
    };
    let Some(item) = best_match(&state.inventory, ctx.catalog, query, |_| true) else {
        return CommandResult::message("You do not carry that.");
    };
    let Some(slot) = item.slot else {
        return CommandResult::message("You cannot equip that.");
    };

    let text = format!("You equip the {}.", item.name);
    let log = match state.equipment.get(&slot) {
        Some(current) if current != &item.id => {
            format!("You swap your {slot} gear for the {}.", item.name)
        }
        _ => text.clone(),
    };
    CommandResult::new(
        text,
        vec![
            Event::Equip {
                slot,
                item: item.id.clone(),
            },
            Event::log(log),
        ],
    )
}

/// Empties a slot, named directly or by the equipped item.
pub fn unequip(state: &GameState, command: &Command, ctx: &mut CommandContext<'_>) -> CommandResult {
    let Some(query) = command.object() else {
        return CommandResult::message("What would you like to unequip?");
    };
    let lowered = query.to_lowercase();
    let slot = ItemSlot::parse(query).or_else(|| {
        state
            .equipment
            .iter()
            .find(|(_, id)| ctx.catalog.item_name(id).to_lowercase().contains(&lowered))
            .map(|(slot, _)| *slot)
    });
    let Some((slot, id)) = slot.and_then(|slot| state.equipment.get(&slot).map(|id| (slot, id))) else {
        return CommandResult::message("You have nothing equipped there.");
    };

    let text = format!("You unequip the {}.", ctx.catalog.item_name(id));
    CommandResult::new(text.clone(), vec![Event::Unequip { slot }, Event::log(text)])
}

/// Lists carried and equipped items.
pub fn inventory(state: &GameState, _command: &Command, ctx: &mut CommandContext<'_>) -> CommandResult {
    if state.inventory.is_empty() && state.equipment.is_empty() {
        return CommandResult::logged("Your satchel is empty.");
    }

    let mut groups: Vec<(String, usize)> = Vec::new();
    for id in &state.inventory {
        let name = ctx.catalog.item_name(id);
        match groups.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, count)) => *count += 1,
            None => groups.push((name, 1)),
        }
    }

    let mut lines = vec!["You carry:".to_string()];
    if groups.is_empty() {
        lines.push("- nothing".to_string());
    }
    for (name, count) in groups {
        if count > 1 {
            lines.push(format!("- {name} ×{count}"));
        } else {
            lines.push(format!("- {name}"));
        }
    }
    if !state.equipment.is_empty() {
        lines.push("Equipped:".to_string());
        for (slot, id) in &state.equipment {
            lines.push(format!("  {slot}: {}", ctx.catalog.item_name(id)));
        }
    }
    CommandResult::logged(lines.join("\n"))
}
