//! Integration tests for Layer 1: World
//!
//! Tests for the standard catalog, seeded map generation, and the graph cache.

mod catalog;
