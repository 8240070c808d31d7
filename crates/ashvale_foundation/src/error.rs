//! Error types for the Ashvale engine.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Only configuration faults, generation faults, and infrastructure failures
//! are errors. A player typing nonsense is never an `Error`; handlers answer
//! it with narrative text instead.

use std::fmt;

use thiserror::Error;

use crate::id::{ActorId, ItemId, LootTableId, RoomId, SessionId};

/// The main error type for Ashvale operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown room error.
    #[must_use]
    pub fn unknown_room(id: RoomId) -> Self {
        Self::new(ErrorKind::UnknownRoom(id))
    }

    /// Creates an unknown item error.
    #[must_use]
    pub fn unknown_item(id: ItemId) -> Self {
        Self::new(ErrorKind::UnknownItem(id))
    }

    /// Creates an unknown actor error.
    #[must_use]
    pub fn unknown_actor(id: ActorId) -> Self {
        Self::new(ErrorKind::UnknownActor(id))
    }

    /// Creates an invalid world data error.
    #[must_use]
    pub fn invalid_world(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidWorldData(message.into()))
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Returns true if this error is a configuration fault that should stop startup.
    #[must_use]
    pub fn is_configuration_fault(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::DuplicateVerb { .. }
                | ErrorKind::MissingVerbs(_)
                | ErrorKind::UnknownItem(_)
                | ErrorKind::UnknownActor(_)
                | ErrorKind::UnknownLootTable(_)
                | ErrorKind::InvalidWorldData(_)
                | ErrorKind::Config(_)
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Two modules tried to claim the same verb.
    #[error("verb \"{verb}\" already registered by module \"{existing}\"")]
    DuplicateVerb {
        /// The contested verb.
        verb: String,
        /// The module that registered it first.
        existing: String,
    },

    /// The registry is missing handlers for some verbs.
    #[error("no handler registered for verbs: {}", .0.join(", "))]
    MissingVerbs(Vec<String>),

    /// A room id is not part of the room graph.
    #[error("unknown room id \"{0}\"")]
    UnknownRoom(RoomId),

    /// An item id is not in the catalog.
    #[error("unknown item id \"{0}\"")]
    UnknownItem(ItemId),

    /// An actor id is neither an enemy nor an NPC.
    #[error("unknown actor id \"{0}\"")]
    UnknownActor(ActorId),

    /// A loot table id is not in the catalog.
    #[error("unknown loot table \"{0}\"")]
    UnknownLootTable(LootTableId),

    /// Static world data is inconsistent.
    #[error("invalid world data: {0}")]
    InvalidWorldData(String),

    /// The map generator could not connect every required room.
    #[error(
        "room graph for session \"{session}\" left {} required room(s) unreachable after {attempts} attempt(s): {}",
        .unreachable.len(),
        join_ids(.unreachable)
    )]
    GenerationFailed {
        /// The session whose graph failed.
        session: SessionId,
        /// Required rooms that stayed unreachable on the final attempt.
        unreachable: Vec<RoomId>,
        /// Number of attempts made.
        attempts: usize,
    },

    /// A session id has no stored state.
    #[error("unknown session \"{0}\"")]
    UnknownSession(SessionId),

    /// Configuration could not be loaded or is out of range.
    #[error("configuration error: {0}")]
    Config(String),

    /// Snapshot encoding or decoding failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// File or terminal I/O failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

fn join_ids(ids: &[RoomId]) -> String {
    ids.iter()
        .map(RoomId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Session the failing operation ran for.
    pub session: Option<SessionId>,
    /// Operation or subsystem name.
    pub operation: Option<String>,
    /// Chain of callers, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the session.
    #[must_use]
    pub fn with_session(mut self, session: SessionId) -> Self {
        self.session = Some(session);
        self
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "during {operation}")?;
        }
        if let Some(session) = &self.session {
            write!(f, " for session {session}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
