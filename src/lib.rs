//! Terminal runner (workspace facade crate).
//!
//! Re-exports the workspace crates under stable `terminal_runner::{core, input,
//! session, term, types}` paths so the binary, tests and benches share one
//! import surface.

pub use terminal_runner_core as core;
pub use terminal_runner_input as input;
pub use terminal_runner_session as session;
pub use terminal_runner_term as term;
pub use terminal_runner_types as types;
