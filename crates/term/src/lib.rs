//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. Views render
//! a [`core::GameSnapshot`] into a framebuffer; [`TerminalRenderer`] flushes
//! framebuffers to the terminal through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep views pure so they can be asserted cell by cell
//! - Only write changed cells to the terminal

pub mod fb;
pub mod game_over;
pub mod game_view;
pub mod renderer;

pub use terminal_runner_core as core;
pub use terminal_runner_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_over::{GameOverView, EXIT_HINT};
pub use game_view::{hud_line, GameView, Palette, Viewport, INSTRUCTIONS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
