//! Console state machine
//!
//! The console is either showing the menu or running exactly one
//! session. Transitions are explicit, finite and deterministic.

pub mod events;
pub mod machine;

pub use events::ConsoleEvent;
pub use machine::{ConsoleState, GameMode, MenuState};
