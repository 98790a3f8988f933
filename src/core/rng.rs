//! Injectable randomness for secret draws.
//!
//! ## Key Features
//!
//! - **Injectable**: engines draw through the `RandomSource` trait, never
//!   from ambient thread-local state
//! - **Deterministic**: `GameRng` with the same seed produces the same secrets
//! - **Scriptable**: `ScriptedSource` replays fixed values for tests
//!
//! ## Usage
//!
//! ```
//! use guess_games::core::{GameRng, RandomSource, ScriptedSource};
//!
//! let mut rng = GameRng::new(42);
//! let secret = rng.draw_inclusive(1, 25);
//! assert!((1..=25).contains(&secret));
//!
//! // Same seed, same secret
//! let mut again = GameRng::new(42);
//! assert_eq!(again.draw_inclusive(1, 25), secret);
//!
//! // Scripted values for tests
//! let mut scripted = ScriptedSource::new([10]);
//! assert_eq!(scripted.draw_inclusive(1, 25), 10);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform random draws.
///
/// Engines take this as a type parameter so tests can substitute
/// deterministic values for the secret.
pub trait RandomSource {
    /// Draw a value uniformly from `low..=high`.
    ///
    /// Callers guarantee `low <= high`.
    fn draw_inclusive(&mut self, low: u32, high: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn draw_inclusive(&mut self, low: u32, high: u32) -> u32 {
        (**self).draw_inclusive(low, high)
    }
}

/// Seedable RNG backed by ChaCha8.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
/// The seed is retained so a session can be reproduced from logs.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn draw_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.inner.gen_range(low..=high)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Values outside the requested range are clamped into it, so a script
/// written for one tier stays valid under another.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source that yields `values` in order.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        let values: Vec<u32> = values.into_iter().collect();
        assert!(!values.is_empty(), "ScriptedSource needs at least one value");
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn draw_inclusive(&mut self, low: u32, high: u32) -> u32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(low, high)
    }
}
