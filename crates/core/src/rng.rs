//! RNG module - randomness capability for obstacle spawning
//!
//! The simulation never touches a global random source. Instead the spawner
//! owns a [`SpawnRng`], which is any `rand` generator in production (seeded
//! [`Pcg32`] by default) or a [`ScriptedRng`] replaying fixed rolls in tests.

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform dice rolls.
pub trait SpawnRng {
    /// Uniform value in `[0, sides)`. `sides` is never zero.
    fn roll(&mut self, sides: u32) -> u32;
}

impl<R: RngCore> SpawnRng for R {
    fn roll(&mut self, sides: u32) -> u32 {
        self.random_range(0..sides)
    }
}

/// Default generator, deterministic for a given seed.
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of rolls, cycling when exhausted.
///
/// Each scripted value is reduced modulo the requested number of sides.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    rolls: Vec<u32>,
    index: usize,
}

impl ScriptedRng {
    /// Create a script. An empty script always rolls 0.
    pub fn new(rolls: impl Into<Vec<u32>>) -> Self {
        Self {
            rolls: rolls.into(),
            index: 0,
        }
    }

    /// A script that always rolls `value`.
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of rolls consumed so far.
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl SpawnRng for ScriptedRng {
    fn roll(&mut self, sides: u32) -> u32 {
        let value = if self.rolls.is_empty() {
            0
        } else {
            self.rolls[self.index % self.rolls.len()]
        };
        self.index += 1;
        value % sides
    }
}
