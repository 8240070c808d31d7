//! Integration tests for attack exchanges, loot, prayer, and the fallen lockout

use ashvale_engine::{
    Command, EncounterStatus, Event, FALLEN_MESSAGE, Fact, Verb, apply_events, effective_stats,
};
use ashvale_foundation::{ActorId, ItemId};

use crate::support::Game;

fn crypt(session: &str) -> Game {
    Game::in_room(session, "ember-chapel-crypt")
}

// =============================================================================
// Exchanges
// =============================================================================

#[test]
fn first_strike_opens_an_encounter() {
    let mut game = crypt("first-blood");
    let result = game.play(&Command::new(Verb::Attack).with_object("husk"));

    assert!(result.text.starts_with("You engage Husk!"));
    assert!(result.events.contains(&Event::Damage {
        target: ActorId::new("husk-1"),
        amount: 3,
    }));
    let encounter = game.state.encounter.clone().unwrap();
    assert_eq!(encounter.enemy, ActorId::new("husk-1"));
    assert_eq!(encounter.enemy_hp, 1);
    assert_eq!(encounter.status, EncounterStatus::Active);
}

#[test]
fn ward_turns_aside_weak_blows() {
    let mut game = crypt("warded");
    let result = game.play(&Command::new(Verb::Attack));
    assert!(result.text.contains("Husk's blow glances off your wards."));
    assert_eq!(game.state.stats.hp, 10);
}

#[test]
fn second_strike_fells_the_husk_and_drops_loot() {
    let mut game = crypt("finisher");
    game.play(&Command::new(Verb::Attack).with_object("husk"));
    let result = game.play(&Command::new(Verb::Attack).with_object("husk"));

    assert!(result.text.contains("Husk collapses into ash."));
    assert!(game.state.flag(&Fact::EnemyDefeated(ActorId::new("husk-1"))));
    assert_eq!(
        game.state.encounter.as_ref().map(|e| e.status),
        Some(EncounterStatus::Victory)
    );
    assert!(game.state.has_item(&ItemId::new("ember-1")));
    assert!(game.state.has_item(&ItemId::new("embersteel-knife")));

    let visible = game.dispatcher.visible_context(&game.state).unwrap();
    assert_eq!(visible.actors, vec![ActorId::new("husk-2")]);
}

#[test]
fn nothing_to_attack_in_a_safe_room() {
    let mut game = Game::new("pacifist");
    let result = game.peek(&Command::new(Verb::Attack).with_object("dragon"));
    assert_eq!(result.text, "You see no dragon here to attack.");
    assert!(result.is_noop());
}

#[test]
fn villagers_cannot_be_harmed() {
    let mut game = Game::new("rude");
    let result = game.peek(&Command::new(Verb::Attack).with_object("ida"));
    assert_eq!(result.text, "You cannot harm that.");
}

#[test]
fn leaving_drops_the_encounter() {
    let mut game = crypt("coward");
    game.play(&Command::new(Verb::Attack));
    assert!(game.state.encounter.is_some());
    let exit = game.dispatcher.visible_context(&game.state).unwrap().exits[0];
    game.play(&Command::new(Verb::Go).with_object(exit.as_str()));
    assert!(game.state.encounter.is_none());
}

// =============================================================================
// One-Shot Buffs
// =============================================================================

#[test]
fn a_spent_candle_wards_off_exactly_one_exchange() {
    let mut game = Game::in_room("wolf-den", "witchwell-approach");
    let candle = ItemId::new("ward-candle-1");
    game.state = apply_events(&game.state, &[Event::GiveItem { item: candle.clone() }]);

    game.play(&Command::new(Verb::Use).with_object("candle"));
    assert_eq!(effective_stats(&game.state, game.catalog()).ward, 4);

    let buffed = game.play(&Command::new(Verb::Attack).with_object("wolf"));
    assert!(buffed.events.contains(&Event::Damage {
        target: ActorId::new("gloom-wolf-1"),
        amount: 2,
    }));
    assert!(buffed.events.contains(&Event::flag(Fact::ItemBuff(candle.clone()), false)));
    assert!(buffed.text.contains("Gloom Wolf's blow glances off your wards."));
    assert_eq!(game.state.stats.hp, 10);
    assert!(!game.state.flag(&Fact::ItemBuff(candle)));
    assert_eq!(effective_stats(&game.state, game.catalog()).ward, 2);

    let plain = game.play(&Command::new(Verb::Attack).with_object("wolf"));
    assert!(plain.events.contains(&Event::PlayerDamage { amount: 1 }));
    assert!(plain.text.contains("Gloom Wolf strikes you for 1 damage."));
    assert_eq!(game.state.stats.hp, 9);
    assert_eq!(game.state.encounter.clone().unwrap().enemy_hp, 3);
}

#[test]
fn attacks_without_buffs_clear_nothing() {
    let mut game = Game::in_room("unbuffed", "witchwell-approach");
    let result = game.peek(&Command::new(Verb::Attack));
    assert!(
        !result
            .events
            .iter()
            .any(|event| matches!(event, Event::SetFlag { fact: Fact::ItemBuff(_), .. }))
    );
}

// =============================================================================
// Prayer and Defeat
// =============================================================================

#[test]
fn prayer_heals_once_per_room() {
    let mut game = Game::new("devout");
    game.state = apply_events(&game.state, &[Event::PlayerDamage { amount: 5 }]);

    let first = game.play(&Command::new(Verb::Pray));
    assert!(first.text.starts_with("You bow your head."));
    assert_eq!(game.state.stats.hp, 6);

    let second = game.play(&Command::new(Verb::Pray));
    assert!(second.text.starts_with("You have already prayed here"));
    assert_eq!(game.state.stats.hp, 6);
}

#[test]
fn fallen_players_are_locked_out() {
    let mut game = Game::new("fallen");
    game.state = apply_events(&game.state, &[Event::PlayerDamage { amount: 99 }]);
    assert!(game.state.is_fallen());
    for verb in [Verb::Look, Verb::Go, Verb::Pray] {
        let result = game.peek(&Command::new(verb));
        assert_eq!(result.text, FALLEN_MESSAGE);
        assert!(result.is_noop());
    }
}

#[test]
fn stats_report_effective_values() {
    let mut game = Game::new("curious");
    let result = game.peek(&Command::new(Verb::Stats));
    assert_eq!(
        result.text,
        "Your current strength:\nHealth: 10\nPower: 3\nWard: 2"
    );
}
