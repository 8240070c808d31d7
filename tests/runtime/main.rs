//! Integration tests for Layer 4: Runtime
//!
//! Tests for configuration, session lifecycle, command processing, and snapshots.

mod config;
mod processor;
mod sessions;
mod snapshots;
