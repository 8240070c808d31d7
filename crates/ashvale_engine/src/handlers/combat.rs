//! Fighting: `attack` and `stats`.
//!
//! One `attack` is one exchange. The player always strikes first for at least
//! one point of damage; a surviving enemy answers, reduced by the player's
//! ward. Buffs from consumables last for exactly one exchange.

use ashvale_foundation::{ActorId, ItemId, Result};
use ashvale_world::{ActorKind, Catalog, Enemy};

use crate::command::{Command, CommandResult, Verb};
use crate::dispatcher::CommandContext;
use crate::effective::effective_stats;
use crate::event::Event;
use crate::fact::Fact;
use crate::registry::{Module, Registry};
use crate::state::{EncounterPatch, EncounterStatus, GameState, Initiative};

/// Registers `attack` and `stats`.
///
/// # Errors
///
/// Returns `DuplicateVerb` if another module already claimed one of them.
pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(Module::Combat, Verb::Attack, attack)?;
    registry.register(Module::Combat, Verb::Stats, stats)?;
    Ok(())
}

/// Damage the player deals: never below one.
#[must_use]
pub fn player_damage(power: i32, enemy_ward: i32) -> i32 {
    (power - enemy_ward).max(1)
}

/// Damage an enemy deals: may be zero.
#[must_use]
pub fn enemy_damage(power: i32, player_ward: i32, ward_aura: bool) -> i32 {
    (power - player_ward - i32::from(ward_aura)).max(0)
}

fn choose_target(command: &Command, ctx: &CommandContext<'_>) -> Option<ActorId> {
    let actors = &ctx.visible.actors;
    if let Some(query) = command.object() {
        let query = query.to_lowercase();
        return actors
            .iter()
            .find(|actor| {
                actor.as_str().to_lowercase().contains(&query)
                    || ctx.catalog.actor_name(actor).to_lowercase().contains(&query)
            })
            .cloned();
    }
    actors
        .iter()
        .find(|actor| ctx.catalog.actor_kind(actor) == Some(ActorKind::Enemy))
        .or_else(|| actors.first())
        .cloned()
}

/// Trades one round of blows with a visible enemy.
pub fn attack(state: &GameState, command: &Command, ctx: &mut CommandContext<'_>) -> CommandResult {
    let Some(target) = choose_target(command, ctx) else {
        return match command.object() {
            Some(query) => CommandResult::message(format!("You see no {query} here to attack.")),
            None => CommandResult::message("There is nothing here to attack."),
        };
    };
    let catalog = ctx.catalog;
    let Some(enemy) = catalog.enemy(target.as_str()) else {
        return CommandResult::message("You cannot harm that.");
    };

    let mut events = Vec::new();
    let mut messages = Vec::new();

    let enemy_hp = match &state.encounter {
        Some(encounter) if encounter.is_active_against(&target) => encounter.enemy_hp,
        _ => {
            events.push(Event::encounter(
                EncounterPatch::new()
                    .with_enemy(target.clone())
                    .with_enemy_hp(enemy.stats.hp)
                    .with_status(EncounterStatus::Active)
                    .with_initiative(Initiative::Player),
            ));
            messages.push(format!("You engage {}!", enemy.name));
            enemy.stats.hp
        }
    };

    let stats = effective_stats(state, catalog);
    let damage = player_damage(stats.power, enemy.stats.ward);
    events.push(Event::Damage {
        target: target.clone(),
        amount: damage,
    });
    messages.push(format!("You strike {} for {damage} damage.", enemy.name));
    events.extend(
        state
            .active_buffs()
            .map(|item| Event::flag(Fact::ItemBuff(item.clone()), false)),
    );

    let remaining = enemy_hp - damage;
    if remaining <= 0 {
        let loot = enemy
            .loot_table
            .as_ref()
            .and_then(|id| catalog.loot_table(id))
            .map(|table| table.roll(&mut *ctx.random))
            .unwrap_or_default();
        enemy_falls(enemy, &target, loot, catalog, &mut events, &mut messages);
    } else {
        enemy_answers(state, enemy, remaining, stats.ward, &mut events, &mut messages);
    }

    CommandResult::new(messages.join(" "), events)
}

fn enemy_falls(
    enemy: &Enemy,
    target: &ActorId,
    loot: Vec<ItemId>,
    catalog: &Catalog,
    events: &mut Vec<Event>,
    messages: &mut Vec<String>,
) {
    let collapse = format!("{} collapses into ash.", enemy.name);
    events.push(Event::Defeat {
        target: target.clone(),
    });
    events.push(Event::flag(Fact::EnemyDefeated(target.clone()), true));
    events.push(Event::encounter(
        EncounterPatch::new()
            .with_enemy_hp(0)
            .with_status(EncounterStatus::Victory),
    ));
    events.push(Event::log(collapse.clone()));
    messages.push(collapse);

    for item in loot {
        let line = format!("You recover {}.", catalog.item_name(&item));
        events.push(Event::GiveItem { item });
        events.push(Event::log(line.clone()));
        messages.push(line);
    }
}

fn enemy_answers(
    state: &GameState,
    enemy: &Enemy,
    remaining: i32,
    player_ward: i32,
    events: &mut Vec<Event>,
    messages: &mut Vec<String>,
) {
    let still_fighting = EncounterPatch::new()
        .with_enemy_hp(remaining)
        .with_status(EncounterStatus::Active)
        .with_initiative(Initiative::Enemy);
    let damage = enemy_damage(enemy.stats.power, player_ward, state.flag(&Fact::WardAura));

    if damage == 0 {
        messages.push(format!("{}'s blow glances off your wards.", enemy.name));
        events.push(Event::encounter(still_fighting));
        return;
    }

    events.push(Event::PlayerDamage { amount: damage });
    messages.push(format!("{} strikes you for {damage} damage.", enemy.name));
    if state.stats.hp - damage <= 0 {
        let fallen = "You fall as the Night closes in.";
        events.push(Event::PlayerDefeated);
        events.push(Event::encounter(
            EncounterPatch::new().with_status(EncounterStatus::Defeat),
        ));
        events.push(Event::log(fallen));
        messages.push(fallen.to_string());
    } else {
        events.push(Event::encounter(still_fighting));
    }
}

/// Shows effective stats.
pub fn stats(state: &GameState, _command: &Command, ctx: &mut CommandContext<'_>) -> CommandResult {
    let stats = effective_stats(state, ctx.catalog);
    CommandResult::logged(format!(
        "Your current strength:\nHealth: {}\nPower: {}\nWard: {}",
        stats.hp, stats.power, stats.ward
    ))
}
