//! World content and room-graph generation for Ashvale.
//!
//! This crate provides:
//! - [`Catalog`] - Validated static content: rooms, items, actors, loot, prayers
//! - [`WorldLayout`] - Chains, zone entries, and boss rooms the generator honours
//! - [`MapGenerator`] - Deterministic per-session room graphs with connectivity repair
//! - [`RoomGraphCache`] - Thread-safe per-session graph memoization

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod actor;
pub mod cache;
pub mod catalog;
pub mod data;
pub mod generator;
pub mod item;
pub mod layout;
pub mod loot;
pub mod room;
pub mod template;

pub use actor::{ActorKind, Enemy, Figure, Npc, humanize_id};
pub use cache::RoomGraphCache;
pub use catalog::Catalog;
pub use data::HUB_ROOM;
pub use generator::{DEFAULT_MAX_ATTEMPTS, MapGenerator};
pub use item::{Item, ItemTag, ItemTier};
pub use layout::{BossRoom, Chain, ChainLink, LinkDirection, WorldLayout};
pub use loot::{LootEntry, LootTable};
pub use room::{Room, RoomGraph};
pub use template::{RoomChain, RoomRole, RoomTemplate};
