//! Entropy-backed RNG oracle for interactive play.

use duel_core::RngOracle;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// [`RngOracle`] backed by a small fast PRNG.
///
/// Seeded from OS entropy by default; `--seed` pins the sequence for
/// reproducible matches.
pub struct EntropyRng(SmallRng);

impl EntropyRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(SmallRng::seed_from_u64(seed)),
            None => Self(SmallRng::from_entropy()),
        }
    }
}

impl RngOracle for EntropyRng {
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        self.0.gen_range(min..=max)
    }
}
