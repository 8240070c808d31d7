//! Core identifiers, directions, stats, randomness, and errors for Ashvale.
//!
//! This crate provides:
//! - Typed string identifiers ([`RoomId`], [`ItemId`], [`ActorId`], [`LootTableId`], [`SessionId`])
//! - [`Direction`] - The six exit directions and their opposites
//! - [`Stats`], [`StatsDelta`], [`ItemSlot`] - Numeric character model
//! - [`RandomSource`] - Injected entropy for deterministic command resolution
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod direction;
pub mod error;
pub mod id;
pub mod random;
pub mod stats;

pub use direction::Direction;
pub use error::{Error, ErrorContext, ErrorKind};
pub use id::{ActorId, ItemId, LootTableId, RoomId, SessionId};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, session_seed};
pub use stats::{BASE_STATS, ItemSlot, Stats, StatsDelta};

/// Result type alias using Ashvale's Error type.
pub type Result<T> = std::result::Result<T, Error>;
