//! Integration tests for Layer 2: Engine
//!
//! Tests for dispatch, handlers, the reducer, and event serialization.

mod combat;
mod dialogue;
mod events;
mod movement;
mod registry;
mod support;
