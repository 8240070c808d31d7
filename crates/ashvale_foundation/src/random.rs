//! Injected entropy.
//!
//! Nothing in the engine reads ambient randomness. Generation seeds a
//! [`SeededRandom`] from the session id; command handlers receive a
//! `&mut dyn RandomSource` so tests can script every roll.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::id::SessionId;

/// Seed used when a session id hashes to zero or is empty.
pub const FALLBACK_SEED: u32 = 0x9e37_79b9;

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// A source of uniform doubles in `[0, 1)`.
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns an index in `0..len`. `len` must be non-zero.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn next_index(&mut self, len: usize) -> usize {
        let idx = (self.next_f64() * len as f64).floor() as usize;
        idx.min(len.saturating_sub(1))
    }

    /// Returns an integer in `low..=high`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        let span = (high - low + 1) as usize;
        low + self.next_index(span) as i32
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Picks one element of a non-empty slice.
pub fn choose<'a, T>(random: &mut (impl RandomSource + ?Sized), items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(random.next_index(items.len()))
}

/// Fisher-Yates shuffle driven by a [`RandomSource`].
pub fn shuffle<T>(random: &mut (impl RandomSource + ?Sized), items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = random.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Derives the 32-bit generation seed for a session id (FNV-1a over UTF-8 bytes).
#[must_use]
pub fn session_seed(session: &SessionId) -> u32 {
    let bytes = session.as_str().as_bytes();
    if bytes.is_empty() {
        return FALLBACK_SEED;
    }
    let hash = bytes.iter().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ u32::from(*byte)).wrapping_mul(FNV_PRIME)
    });
    if hash == 0 { FALLBACK_SEED } else { hash }
}

/// Deterministic generator backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    /// Creates a generator from a 64-bit seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates the generation stream for a session.
    #[must_use]
    pub fn for_session(session: &SessionId) -> Self {
        Self::new(u64::from(session_seed(session)))
    }

    /// Creates a generator seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Values are clamped into `[0, 1)`. An empty script always yields `0.0`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Creates a scripted source.
    #[must_use]
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// A source that always returns the same value.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
