//! Terminal input module.
//!
//! Maps `crossterm` events into [`crate::types::InputEvent`] so the
//! simulation never depends on a terminal backend.

pub mod map;

pub use terminal_runner_types as types;

pub use map::{map_event, map_key, should_quit};
