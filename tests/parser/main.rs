//! Integration tests for Layer 3: Parser
//!
//! Tests for rule-based parsing and validation against real room contexts.

mod rules;
mod service;
mod support;
