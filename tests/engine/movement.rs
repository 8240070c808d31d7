//! Integration tests for movement and room description

use ashvale_engine::{Command, Event, Verb};
use ashvale_foundation::{Direction, RoomId};
use ashvale_world::HUB_ROOM;

use crate::support::Game;

// =============================================================================
// Go
// =============================================================================

#[test]
fn every_hub_exit_leads_where_the_graph_says() {
    let game = Game::new("hub-walk");
    let graph = game.dispatcher.graphs().get(&game.state.session).unwrap();
    let hub = graph.room(&RoomId::new(HUB_ROOM)).unwrap().clone();
    assert!(!hub.exits.is_empty());

    for (direction, target) in &hub.exits {
        let mut walker = Game::new("hub-walk");
        let result = walker.play(&Command::new(Verb::Go).with_object(direction.as_str()));
        assert_eq!(
            result.events[0],
            Event::Move {
                from: RoomId::new(HUB_ROOM),
                to: target.clone(),
            }
        );
        assert_eq!(&walker.state.room, target);
        let name = &graph.room(target).unwrap().name;
        assert!(result.text.starts_with(&format!("{name}.")));
    }
}

#[test]
fn walking_back_returns_to_the_hub() {
    let mut game = Game::new("round-trip");
    let exit = game.dispatcher.visible_context(&game.state).unwrap().exits[0];
    game.play(&Command::new(Verb::Go).with_object(exit.short()));
    game.play(&Command::new(Verb::Go).with_object(exit.opposite().as_str()));
    assert_eq!(game.state.room, RoomId::new(HUB_ROOM));
}

#[test]
fn blocked_direction_changes_nothing() {
    let mut game = Game::new("blocked");
    let exits = game.dispatcher.visible_context(&game.state).unwrap().exits;
    let Some(closed) = Direction::ALL.into_iter().find(|d| !exits.contains(d)) else {
        return;
    };
    let before = game.state.clone();
    let result = game.play(&Command::new(Verb::Go).with_object(closed.as_str()));
    assert!(result.events.is_empty());
    assert_eq!(result.text, format!("You cannot go {closed} from here."));
    assert_eq!(game.state, before);
}

#[test]
fn go_without_direction_asks() {
    let mut game = Game::new("aimless");
    let result = game.peek(&Command::new(Verb::Go));
    assert!(result.is_noop());
    assert_eq!(result.text, "Which way would you like to go?");
}

// =============================================================================
// Look and Map
// =============================================================================

#[test]
fn look_describes_the_hub() {
    let mut game = Game::new("looker");
    let result = game.play(&Command::new(Verb::Look));
    assert!(result.text.starts_with("Graysong Square."));
    assert!(result.text.contains("Loose Ember"));
    assert_eq!(game.state.log.back(), Some(&result.text));
}

#[test]
fn map_lists_neighbours() {
    let mut game = Game::new("cartographer");
    let exits = game.dispatcher.visible_context(&game.state).unwrap().exits;
    let result = game.peek(&Command::new(Verb::Map));
    assert!(result.text.starts_with("The world map opens before you."));
    for exit in exits {
        assert!(result.text.contains(&format!("  {exit}: ")));
    }
}
