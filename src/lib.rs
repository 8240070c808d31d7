//! Ashvale - The Ashen Vale text adventure engine
//!
//! This crate re-exports all layers of the Ashvale system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: ashvale_runtime    — Sessions, command processing, config, REPL
//! Layer 3: ashvale_parser     — Rule-based natural-language parsing
//! Layer 2: ashvale_engine     — Game state, events, reducer, verb dispatch
//! Layer 1: ashvale_world      — Static content, seeded room-graph generation
//! Layer 0: ashvale_foundation — Core types (ids, Direction, Stats, Error)
//! ```

pub use ashvale_engine as engine;
pub use ashvale_foundation as foundation;
pub use ashvale_parser as parser;
pub use ashvale_runtime as runtime;
pub use ashvale_world as world;
