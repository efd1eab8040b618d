//! Jump state machine.
//!
//! A jump is a fixed arc of `jump_duration` frames: a linear climb of
//! `jump_height` rows over the first half and a linear fall over the second.
//! All arithmetic is integer and truncating, so the arc is stepped (and
//! slightly asymmetric around the apex).

use crate::types::GameConfig;

/// Jump phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JumpPhase {
    Grounded,
    Ascending,
    Descending,
}

/// Jump progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Jump {
    active: bool,
    elapsed: u32,
}

impl Jump {
    /// Take off. Returns false (and does nothing) while already airborne.
    pub fn start(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.elapsed = 0;
        true
    }

    pub fn is_jumping(&self) -> bool {
        self.active
    }

    /// Frames since take-off.
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn phase(&self, config: &GameConfig) -> JumpPhase {
        if !self.active {
            JumpPhase::Grounded
        } else if self.elapsed < config.jump_duration / 2 {
            JumpPhase::Ascending
        } else {
            JumpPhase::Descending
        }
    }

    /// Advance one frame and return the new bottom row of the player.
    ///
    /// Returns `None` while grounded, leaving the player where it is.
    pub fn step(&mut self, config: &GameConfig) -> Option<i32> {
        if !self.active {
            return None;
        }

        self.elapsed += 1;

        let half = (config.jump_duration / 2) as i32;
        let elapsed = self.elapsed as i32;
        let height = config.jump_height;

        let y = if elapsed < half {
            config.ground_y - height * elapsed / half
        } else if self.elapsed < config.jump_duration {
            config.ground_y - height + height * (elapsed - half) / half
        } else {
            self.active = false;
            self.elapsed = 0;
            config.ground_y
        };
        Some(y)
    }
}
