//! Sessions, command processing, configuration, and the REPL for Ashvale.
//!
//! This crate provides:
//! - [`AshvaleConfig`] - TOML configuration with environment overrides
//! - [`SessionStore`], [`MemoryStore`], [`SessionManager`] - Session lifecycle
//! - [`CommandProcessor`] - Parse, confirm, dispatch, and persist one request
//! - [`ClientView`] - The client-facing projection of a session
//! - [`Repl`] - Interactive game loop
//! - `MessagePack` snapshots of game state

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clock;
pub mod config;
pub mod editor;
pub mod logging;
pub mod processor;
pub mod repl;
pub mod serialize;
pub mod session;
pub mod store;
pub mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AshvaleConfig, GenerationConfig, LoggingConfig, NluConfig, StoreConfig};
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use processor::{CommandProcessor, CommandRequest, CommandResponse, NluReport};
pub use repl::{Outcome, Repl};
pub use session::SessionManager;
pub use store::{MemoryStore, SessionStore, StoredSession};
pub use view::{ActorView, ClientView, Disposition, EquippedView, InventoryGroup};
