//! Talk, prayer, and help.

use ashvale_foundation::Result;
use ashvale_foundation::random::choose;

use crate::command::{Command, CommandResult, Verb, verb_listing};
use crate::dispatcher::CommandContext;
use crate::event::Event;
use crate::fact::Fact;
use crate::registry::{Module, Registry};
use crate::state::GameState;

/// Spoken in rooms without their own prayer.
pub const FALLBACK_OMEN: &str = "Your prayer fades into the Night with no answer.";

/// Registers `talk`, `pray`, and `help`.
///
/// # Errors
///
/// Returns `DuplicateVerb` if another module already claimed one of them.
pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(Module::Core, Verb::Talk, talk)?;
    registry.register(Module::Core, Verb::Pray, pray)?;
    registry.register(Module::Core, Verb::Help, help)?;
    Ok(())
}

/// Hears one dialogue line from a villager.
pub fn talk(_state: &GameState, command: &Command, ctx: &mut CommandContext<'_>) -> CommandResult {
    let catalog = ctx.catalog;
    let actors = &ctx.visible.actors;
    let target = match command.object() {
        Some(query) => {
            let query = query.to_lowercase();
            actors.iter().find(|actor| {
                actor.as_str().to_lowercase().contains(&query)
                    || catalog.actor_name(actor).to_lowercase().contains(&query)
            })
        }
        None => actors
            .iter()
            .find(|actor| actor.as_str().starts_with("villager")),
    };
    let Some(target) = target.cloned() else {
        return CommandResult::message("No one here answers your words.");
    };
    let Some(npc) = catalog.npc(target.as_str()) else {
        return CommandResult::message("Only the Night listens.");
    };
    let Some(line) = choose(&mut *ctx.random, &npc.dialogue) else {
        return CommandResult::message("Only the Night listens.");
    };
    CommandResult::logged(format!("{} says: \"{line}\"", npc.name))
}

/// Heals once per room.
pub fn pray(state: &GameState, _command: &Command, ctx: &mut CommandContext<'_>) -> CommandResult {
    let fact = Fact::PrayerUsed(state.room.clone());
    if state.flag(&fact) {
        return CommandResult::logged("You have already prayed here; the embers offer no more.");
    }

    let heal = ctx.random.next_in_range(1, 4);
    let omen = ctx.catalog.prayer(&state.room).unwrap_or(FALLBACK_OMEN);
    let text = format!("{omen} Warmth mends your wounds (+{heal} HP).");
    CommandResult::new(
        text.clone(),
        vec![
            Event::PlayerHeal { amount: heal },
            Event::flag(fact, true),
            Event::log(text),
        ],
    )
}

/// Lists verbs and exits.
pub fn help(_state: &GameState, _command: &Command, ctx: &mut CommandContext<'_>) -> CommandResult {
    let mut text = format!("Available commands: {}", verb_listing(&ctx.verbs));
    if !ctx.visible.exits.is_empty() {
        let exits: Vec<&str> = ctx.visible.exits.iter().map(|d| d.as_str()).collect();
        text.push_str(&format!(
            "\nExits: {} (short: n,s,e,w,u,d)",
            exits.join(", ")
        ));
    }
    CommandResult::message(text)
}
