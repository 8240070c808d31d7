//! End-to-end scenarios
//!
//! Whole sessions driven through the command processor and the REPL, the way
//! a player would experience them.

mod crypt;
mod endings;
mod support;
