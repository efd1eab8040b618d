//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation
//! logic. It has **no dependencies** on terminals, timers, or I/O, making it:
//!
//! - **Deterministic**: the same seed (or scripted rolls) produces identical runs
//! - **Testable**: every rule is checked frame by frame
//! - **Portable**: any front end can drive it
//!
//! # Module Structure
//!
//! - [`collision`]: axis-aligned bounding boxes with half-open overlap
//! - [`game_state`]: complete game state and the fixed per-frame update order
//! - [`jump`]: the stepped jump arc state machine
//! - [`level`]: score-derived difficulty
//! - [`rng`]: injectable randomness for the spawner
//! - [`spawner`]: interval + 2-in-3 gated obstacle spawning
//! - [`snapshot`]: read-only state for renderers
//!
//! # Game Rules
//!
//! - The player stands at a fixed column and can only jump (no air jump).
//! - Obstacles enter at the right edge and scroll left by the level speed.
//! - Every frame an obstacle overlaps the player costs one life.
//! - Every obstacle that leaves the left edge scores one point.
//! - Every 10 points speed up obstacles and shorten the spawn interval.
//!
//! # Example
//!
//! ```
//! use terminal_runner_core::GameState;
//! use terminal_runner_types::{GameConfig, InputEvent};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345).unwrap();
//!
//! assert!(game.handle_input(InputEvent::Jump));
//! let report = game.advance_frame();
//!
//! assert_eq!(report.collisions, 0);
//! assert_eq!(game.player_y(), 14);
//! assert!(!game.handle_input(InputEvent::Quit));
//! ```
//!
//! # Timing
//!
//! The core has no clock. Callers invoke
//! [`GameState::advance_frame`](game_state::GameState::advance_frame) once per
//! fixed tick (`GameConfig::frame_period`) and never concurrently with
//! [`GameState::handle_input`](game_state::GameState::handle_input).

pub mod collision;
pub mod game_state;
pub mod jump;
pub mod level;
pub mod rng;
pub mod snapshot;
pub mod spawner;

pub use terminal_runner_types as types;

// Re-export commonly used types for convenience
pub use collision::Aabb;
pub use game_state::{FrameReport, GameState, Obstacle};
pub use jump::{Jump, JumpPhase};
pub use level::level_config;
pub use rng::{seeded, ScriptedRng, SpawnRng};
pub use snapshot::GameSnapshot;
pub use spawner::Spawner;
