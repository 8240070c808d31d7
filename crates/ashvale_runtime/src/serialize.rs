//! Game-state snapshots using `MessagePack`, and JSON rendering.
//!
//! Snapshots hold a single [`GameState`]. The room graph is not saved: it
//! is regenerated from the session id on load.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use ashvale_engine::GameState;
use ashvale_foundation::{Error, ErrorKind, Result};
use serde::Serialize;

/// Serializes a state to `MessagePack` bytes.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(state: &GameState) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(state).map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Deserializes a state from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<GameState> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Saves a state to a file, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_to_file<P: AsRef<Path>>(state: &GameState, path: P) -> Result<()> {
    let path = path.as_ref();
    let io_error = |action: &str, e: std::io::Error| {
        Error::new(ErrorKind::IoError(format!("failed to {action} file '{}': {e}", path.display())))
    };

    let file = File::create(path).map_err(|e| io_error("create", e))?;
    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(state)?;
    writer.write_all(&bytes).map_err(|e| io_error("write to", e))?;
    writer.flush().map_err(|e| io_error("flush", e))?;
    Ok(())
}

/// Loads a state from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<GameState> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!("failed to open file '{}': {e}", path.display())))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::new(ErrorKind::IoError(format!("failed to read file '{}': {e}", path.display())))
    })?;
    from_bytes(&bytes)
}

/// Pretty-printed JSON for display.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as JSON.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}
