//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences per game, so the draws of
//!   one game never shift the draws of another
//!
//! ```
//! use rust_arcade::core::ArcadeRng;
//!
//! let rng = ArcadeRng::new(42);
//! let mut guessing = rng.for_context("guessing");
//!
//! let secret = guessing.gen_range_inclusive(1..=10);
//! assert!((1..=10).contains(&secret));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Seeded RNG used for every random draw in the arcade.
#[derive(Clone, Debug)]
pub struct ArcadeRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ArcadeRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a random integer uniformly in the inclusive range.
    pub fn gen_range_inclusive(&mut self, range: std::ops::RangeInclusive<i64>) -> i64 {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
