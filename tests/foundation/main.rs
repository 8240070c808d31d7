//! Integration tests for Layer 0: Foundation
//!
//! Tests for identifiers, directions, stats, seeded randomness, and errors.

mod errors;
mod random;
