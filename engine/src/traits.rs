//! Trait definitions for injected collaborators
//!
//! The engine's only hidden dependency is randomness. Putting it behind a
//! trait lets tests script exact selection outcomes and lets callers run
//! reproducible ceremonies from a seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for candidate selection
///
/// # Contract
/// `pick` returns an index in `0..len`. The engine never calls it with an
/// empty candidate list, so `len` is always at least 1.
pub trait RandomSource: Send {
    fn pick(&mut self, len: usize) -> usize;
}

/// Thread-local RNG source, the production default
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Seeded RNG source for reproducible ceremonies
#[derive(Debug)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
