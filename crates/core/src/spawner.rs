//! Obstacle spawner.
//!
//! On frames divisible by the current spawn interval the spawner rolls a
//! three-sided die: 1 or 2 spawns, 0 skips. This keeps gaps irregular even
//! at a fixed interval.

use crate::rng::SpawnRng;
use crate::types::{ObstacleKind, SPAWN_GATE_SIDES};

#[derive(Debug, Clone)]
pub struct Spawner<R> {
    rng: R,
}

impl<R: SpawnRng> Spawner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Decide whether an obstacle appears on `frame`, and which kind.
    ///
    /// No randomness is consumed on frames outside the interval.
    pub fn try_spawn(&mut self, frame: u64, interval: u32) -> Option<ObstacleKind> {
        if frame % u64::from(interval) != 0 {
            return None;
        }
        if self.rng.roll(SPAWN_GATE_SIDES) == 0 {
            return None;
        }
        ObstacleKind::from_index(self.rng.roll(ObstacleKind::COUNT))
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}
