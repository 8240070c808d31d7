//! Movement and room description: `go`, `look`, `map`.

use ashvale_foundation::{Direction, Result};

use crate::command::{Command, CommandResult, Verb};
use crate::dispatcher::CommandContext;
use crate::event::Event;
use crate::handlers::describe_room;
use crate::registry::{Module, Registry};
use crate::state::GameState;

/// Registers `go`, `look`, and `map`.
///
/// # Errors
///
/// Returns `DuplicateVerb` if another module already claimed one of them.
pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(Module::Map, Verb::Go, go)?;
    registry.register(Module::Map, Verb::Look, look)?;
    registry.register(Module::Map, Verb::Map, map)?;
    Ok(())
}

/// Walks through an exit.
pub fn go(state: &GameState, command: &Command, ctx: &mut CommandContext<'_>) -> CommandResult {
    let Some(token) = command.object() else {
        return CommandResult::message("Which way would you like to go?");
    };
    let Some(direction) = Direction::parse(token) else {
        return CommandResult::message(format!("You cannot go {token} from here."));
    };
    let destination = ctx
        .graph
        .room(&state.room)
        .and_then(|room| room.exit(direction))
        .and_then(|to| ctx.graph.room(to));
    let Some(destination) = destination else {
        return CommandResult::message(format!("You cannot go {direction} from here."));
    };

    let description = describe_room(destination, state, ctx.catalog);
    CommandResult::new(
        description.clone(),
        vec![
            Event::Move {
                from: state.room.clone(),
                to: destination.id.clone(),
            },
            Event::log(format!("You move {direction} into {description}")),
        ],
    )
}

/// Describes the current room.
pub fn look(state: &GameState, _command: &Command, ctx: &mut CommandContext<'_>) -> CommandResult {
    match ctx.graph.room(&state.room) {
        Some(room) => CommandResult::logged(describe_room(room, state, ctx.catalog)),
        None => CommandResult::message("Only darkness surrounds you."),
    }
}

/// Lists neighbouring rooms by direction.
pub fn map(state: &GameState, _command: &Command, ctx: &mut CommandContext<'_>) -> CommandResult {
    let opening = "The world map opens before you.";
    let mut lines = vec![opening.to_string()];
    if let Some(room) = ctx.graph.room(&state.room) {
        lines.push(format!("You stand in {}.", room.name));
        for (direction, target) in &room.exits {
            let name = ctx
                .graph
                .room(target)
                .map_or_else(|| target.to_string(), |neighbour| neighbour.name.clone());
            lines.push(format!("  {direction}: {name}"));
        }
    }
    CommandResult::new(lines.join("\n"), vec![Event::log(opening)])
}
