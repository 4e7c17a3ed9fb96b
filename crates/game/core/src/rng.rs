//! RNG oracle for random draws.
//!
//! The engine never talks to a random number generator directly; damage
//! rolls and work payouts go through this trait so the core stays
//! deterministic under test and the client decides where entropy comes
//! from.

use crate::catalog::RollRange;

/// Source of uniform random draws for the engine.
pub trait RngOracle {
    /// Draw a uniformly distributed value in `[min, max]` inclusive.
    ///
    /// Implementations may assume `min <= max`; the catalog validates
    /// every range before it reaches the engine.
    fn draw(&mut self, min: u32, max: u32) -> u32;

    /// Draw from an inclusive [`RollRange`].
    fn roll(&mut self, range: RollRange) -> u32 {
        self.draw(range.min, range.max)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RngOracle;

    /// Replays a scripted sequence of draws, clamped into the requested
    /// range. Panics when the script runs dry.
    pub struct ScriptedRng {
        values: Vec<u32>,
        next: usize,
    }

    impl ScriptedRng {
        pub fn new(values: Vec<u32>) -> Self {
            Self { values, next: 0 }
        }
    }

    impl RngOracle for ScriptedRng {
        fn draw(&mut self, min: u32, max: u32) -> u32 {
            let value = self.values[self.next];
            self.next += 1;
            value.clamp(min, max)
        }
    }
}
