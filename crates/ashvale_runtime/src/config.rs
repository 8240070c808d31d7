//! Runtime configuration.
//!
//! Loaded from TOML; every section and field has a default, so an empty
//! document is a valid configuration. A handful of environment variables
//! override the file:
//!
//! | Variable | Field |
//! |---|---|
//! | `SESSION_TTL_MS` | `store.ttl_secs` (milliseconds, rounded up) |
//! | `SESSION_MAX` | `store.max_sessions` |
//! | `NLU_EXECUTE_THRESHOLD` | `nlu.execute_threshold` |
//! | `NLU_CONFIRM_THRESHOLD` | `nlu.confirm_threshold` |

use std::path::Path;

use ashvale_foundation::{Error, ErrorKind, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AshvaleConfig {
    /// Session store limits.
    #[serde(default)]
    pub store: StoreConfig,
    /// Parse confidence thresholds.
    #[serde(default)]
    pub nlu: NluConfig,
    /// Room-graph generation.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AshvaleConfig {
    /// Parses a TOML document and validates it.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the TOML is malformed or a value is out of range.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an `IoError` if the file cannot be read, or a `Config` error
    /// if its contents are invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::new(ErrorKind::IoError(format!(
                "failed to read config '{}': {e}",
                path.as_ref().display()
            )))
        })?;
        Self::from_toml(&source)
    }

    /// Applies overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if a variable is set but unparsable.
    pub fn with_process_env(self) -> Result<Self> {
        self.with_env(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, which maps variable names to values.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if a variable is set but unparsable, or the
    /// result fails validation.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(ttl_ms) = parse_var::<u64>(&lookup, "SESSION_TTL_MS")? {
            self.store.ttl_secs = ttl_ms.div_ceil(1000);
        }
        if let Some(max) = parse_var(&lookup, "SESSION_MAX")? {
            self.store.max_sessions = max;
        }
        if let Some(threshold) = parse_var(&lookup, "NLU_EXECUTE_THRESHOLD")? {
            self.nlu.execute_threshold = threshold;
        }
        if let Some(threshold) = parse_var(&lookup, "NLU_CONFIRM_THRESHOLD")? {
            self.nlu.confirm_threshold = threshold;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks ranges and cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error describing the first violation.
    pub fn validate(&self) -> Result<()> {
        let nlu = &self.nlu;
        for (name, value) in [
            ("nlu.execute_threshold", nlu.execute_threshold),
            ("nlu.confirm_threshold", nlu.confirm_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::config(format!("{name} must be within [0, 1], got {value}")));
            }
        }
        if nlu.confirm_threshold > nlu.execute_threshold {
            return Err(Error::config(format!(
                "nlu.confirm_threshold ({}) exceeds nlu.execute_threshold ({})",
                nlu.confirm_threshold, nlu.execute_threshold
            )));
        }
        if self.generation.max_attempts == 0 {
            return Err(Error::config("generation.max_attempts must be at least 1"));
        }
        if self.store.max_events == 0 {
            return Err(Error::config("store.max_events must be at least 1"));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::config(format!("{key}={raw:?}: {e}"))),
        _ => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Session store limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Idle sessions older than this are pruned. Zero disables expiry.
    pub ttl_secs: u64,
    /// Oldest sessions are pruned beyond this count. Zero means unbounded.
    pub max_sessions: usize,
    /// Most recent events kept per session.
    pub max_events: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 1800,
            max_sessions: 500,
            max_events: 50,
        }
    }
}

impl StoreConfig {
    /// The TTL in milliseconds.
    #[must_use]
    pub fn ttl_ms(&self) -> u64 {
        self.ttl_secs.saturating_mul(1000)
    }
}

/// When a parsed command runs without confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NluConfig {
    /// At or above this confidence, execute immediately.
    pub execute_threshold: f64,
    /// Below this, the parse is a guess; between the two, ask first.
    pub confirm_threshold: f64,
    /// How long a parse is cached.
    pub cache_ttl_ms: u64,
}

impl Default for NluConfig {
    fn default() -> Self {
        Self {
            execute_threshold: 0.8,
            confirm_threshold: 0.5,
            cache_ttl_ms: ashvale_parser::DEFAULT_TTL_MS,
        }
    }
}

/// Room-graph generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Attempts before a session's graph is declared unbuildable.
    pub max_attempts: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_attempts: ashvale_world::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Log output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
