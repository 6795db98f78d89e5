//! Match randomness.
//!
//! One `RaceRng` is seeded per match; each automated pilot gets a fork of
//! it, so a seeded match replays exactly no matter which sides are human.

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 stream.
#[derive(Clone, Debug)]
pub struct RaceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl RaceRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// `seed` when given, otherwise fresh entropy.
    #[must_use]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        Self::new(seed.unwrap_or_else(rand::random))
    }

    /// Split off a child stream seeded from the next word of this one.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::new(self.inner.next_u64())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform pick from `menu`; `None` only when it is empty.
    pub fn choose<'a, T>(&mut self, menu: &'a [T]) -> Option<&'a T> {
        menu.choose(&mut self.inner)
    }
}
