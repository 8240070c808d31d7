//! Integration tests for talk and help

use ashvale_engine::{Command, Event, Verb};
use ashvale_foundation::ScriptedRandom;

use crate::support::Game;

#[test]
fn villager_line_follows_the_injected_random() {
    let mut first = Game::new("gossip");
    let opening = first.peek(&Command::new(Verb::Talk));
    assert_eq!(
        opening.text,
        "Ida the Warden-Candle says: \"Keep the embers close, Warden. Night-snakes lurk whenever the bell is silent.\""
    );
    assert_eq!(opening.events, vec![Event::log(opening.text.clone())]);

    let mut second = Game::new("gossip");
    second.random = ScriptedRandom::constant(0.99);
    let other = second.peek(&Command::new(Verb::Talk).with_object("ida"));
    assert!(other.text.contains("The bell cracked the night the Wardens fell."));
}

#[test]
fn nobody_to_talk_to() {
    let mut game = Game::in_room("quiet", "ember-chapel-crypt");
    let result = game.peek(&Command::new(Verb::Talk));
    assert_eq!(result.text, "No one here answers your words.");
    assert!(result.events.is_empty());
}

#[test]
fn enemies_do_not_answer() {
    let mut game = Game::in_room("hostile-chat", "ember-chapel-crypt");
    let result = game.peek(&Command::new(Verb::Talk).with_object("husk"));
    assert_eq!(result.text, "Only the Night listens.");
    assert!(result.events.is_empty());
}

#[test]
fn help_lists_verbs_and_exits() {
    let mut game = Game::new("helpful");
    let result = game.peek(&Command::new(Verb::Help));
    assert!(result.text.starts_with(
        "Available commands: attack, combine, equip, go, help, inventory, look, map, pray, stats, take, talk, unequip, use"
    ));
    assert!(result.text.contains("\nExits: "));
    assert!(result.events.is_empty());
}
