//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no I/O, making them usable in any
//! context (simulation, rendering, input mapping).
//!
//! # Playfield Geometry
//!
//! The playfield is a character grid. `x` grows to the right, `y` grows
//! downwards. Sprites are anchored by their **bottom** row:
//!
//! - The player's bottom row sits at `GameState::player_y` (equal to
//!   [`GameConfig::ground_y`] when grounded).
//! - Every obstacle's bottom row sits at `ground_y`.
//! - The ground line is drawn one row below, at `ground_y + 1`.
//!
//! # Obstacle Footprints
//!
//! | Kind | Width | Height |
//! |------|-------|--------|
//! | Rock | 4 | 2 |
//! | Crate | 4 | 3 |
//! | Tree | 4 | 4 |
//!
//! Footprints only feed collision bounds; they never affect movement.
//!
//! # Difficulty
//!
//! Difficulty steps up every [`LEVEL_SCORE_STEP`] points. See
//! [`LevelConfig`] for the derived values.
//!
//! # Examples
//!
//! ```
//! use terminal_runner_types::{GameConfig, InputEvent, ObstacleKind};
//!
//! let config = GameConfig::default();
//! assert!(config.validate().is_ok());
//!
//! let tree = ObstacleKind::Tree;
//! assert_eq!(tree.footprint().height, 4);
//! assert_eq!(ObstacleKind::from_index(2), Some(ObstacleKind::Tree));
//!
//! assert!(InputEvent::Jump.is_key_press());
//! assert!(!InputEvent::Resize { width: 80, height: 24 }.is_key_press());
//! ```

pub mod config;

pub use config::{ConfigError, GameConfig};

/// Points needed to raise the difficulty by one step.
pub const LEVEL_SCORE_STEP: u32 = 10;

/// Number of faces on the spawn gate die. A roll of 0 rejects the spawn.
pub const SPAWN_GATE_SIDES: u32 = 3;

/// Player sprite, top row first.
pub const PLAYER_SPRITE: [&str; 3] = [" O ", "/|\\", "/ \\"];

/// Player footprint in character cells.
pub const PLAYER_FOOTPRINT: Footprint = Footprint {
    width: 3,
    height: 3,
};

/// Width and height of a sprite in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Footprint {
    pub width: i32,
    pub height: i32,
}

/// Obstacle kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Rock,
    Crate,
    Tree,
}

impl ObstacleKind {
    /// Every kind, in spawn-table order.
    pub const ALL: [ObstacleKind; 3] = [ObstacleKind::Rock, ObstacleKind::Crate, ObstacleKind::Tree];

    /// Number of kinds the spawner picks from.
    pub const COUNT: u32 = Self::ALL.len() as u32;

    /// Look up a kind by its spawn-table index.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Collision footprint.
    pub const fn footprint(self) -> Footprint {
        match self {
            ObstacleKind::Rock => Footprint {
                width: 4,
                height: 2,
            },
            ObstacleKind::Crate => Footprint {
                width: 4,
                height: 3,
            },
            ObstacleKind::Tree => Footprint {
                width: 4,
                height: 4,
            },
        }
    }

    /// ASCII art, top row first.
    pub fn sprite(self) -> &'static [&'static str] {
        match self {
            ObstacleKind::Rock => &[" /\\ ", "/__\\"],
            ObstacleKind::Crate => &["+--+", "|  |", "+--+"],
            ObstacleKind::Tree => &[" /\\ ", "/  \\", " || ", " || "],
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Rock => "rock",
            ObstacleKind::Crate => "crate",
            ObstacleKind::Tree => "tree",
        }
    }
}

/// Difficulty parameters derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelConfig {
    /// Columns every obstacle moves left per frame.
    pub obstacle_speed: i32,
    /// Spawn attempts happen on frames divisible by this value.
    pub spawn_interval: u32,
}

/// Abstract input event delivered to the simulation.
///
/// The presentation layer maps raw terminal events into this type so the
/// simulation never sees a backend-specific event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Start a jump (ignored while airborne).
    Jump,
    /// End the session.
    Quit,
    /// Any other key press.
    Key,
    /// Terminal was resized.
    Resize { width: u16, height: u16 },
    /// Anything else (mouse, focus, key release, paste).
    Ignored,
}

impl InputEvent {
    /// True for events produced by pressing a key.
    pub fn is_key_press(&self) -> bool {
        matches!(self, InputEvent::Jump | InputEvent::Quit | InputEvent::Key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprints_match_sprites() {
        for kind in ObstacleKind::ALL {
            let sprite = kind.sprite();
            let fp = kind.footprint();
            assert_eq!(sprite.len() as i32, fp.height, "{:?} height", kind);
            for row in sprite {
                assert_eq!(row.chars().count() as i32, fp.width, "{:?} width", kind);
            }
        }
    }

    #[test]
    fn player_footprint_matches_sprite() {
        assert_eq!(PLAYER_SPRITE.len() as i32, PLAYER_FOOTPRINT.height);
        for row in PLAYER_SPRITE {
            assert_eq!(row.chars().count() as i32, PLAYER_FOOTPRINT.width);
        }
    }

    #[test]
    fn from_index_covers_table() {
        for (i, kind) in ObstacleKind::ALL.iter().enumerate() {
            assert_eq!(ObstacleKind::from_index(i as u32), Some(*kind));
        }
        assert_eq!(ObstacleKind::from_index(ObstacleKind::COUNT), None);
    }

    #[test]
    fn only_key_events_count_as_key_presses() {
        assert!(InputEvent::Jump.is_key_press());
        assert!(InputEvent::Quit.is_key_press());
        assert!(InputEvent::Key.is_key_press());
        assert!(!InputEvent::Ignored.is_key_press());
        assert!(!InputEvent::Resize {
            width: 1,
            height: 1
        }
        .is_key_press());
    }
}
