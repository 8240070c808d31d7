//! Game state, events, and command dispatch for Ashvale.
//!
//! This crate provides:
//! - [`GameState`] - The per-session snapshot, built on `im` collections
//! - [`Event`] and [`apply_event`] - The closed event set and its pure reducer
//! - [`Registry`] and [`Dispatcher`] - Verb routing with fresh visibility per command
//! - [`handlers`] - The map, items, combat, and core verb handlers
//! - [`effective_stats`] - Base stats plus equipment plus one-shot buffs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod dispatcher;
pub mod effective;
pub mod event;
pub mod fact;
pub mod handlers;
pub mod reducer;
pub mod registry;
pub mod state;
pub mod visibility;

pub use command::{Command, CommandResult, Verb, verb_listing};
pub use dispatcher::{CommandContext, Dispatcher, FALLEN_MESSAGE};
pub use effective::effective_stats;
pub use event::Event;
pub use fact::Fact;
pub use handlers::describe_room;
pub use reducer::{LOG_LIMIT, apply_event, apply_events};
pub use registry::{HandlerFn, Module, Registry};
pub use state::{Encounter, EncounterPatch, EncounterStatus, GameState, Initiative};
pub use visibility::{VisibleContext, resolve_visible_context};
