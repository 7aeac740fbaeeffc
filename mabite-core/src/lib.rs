//! Board-agnostic core logic for the MABITE cognitive console firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (presenter, audio cue, stimulus lights, input port)
//! - Console state machine and menu controller
//! - Timer and cue scheduling (no blocking delays)
//! - Input debouncing and dial mapping
//! - The three mini-game engines and the global challenge
//! - Best-score tracking
//!
//! Everything advances from a single `tick(now_ms)` call, so the whole
//! console can be driven on the host with a simulated clock.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod context;
pub mod games;
pub mod input;
pub mod menu;
pub mod scheduler;
pub mod score;
pub mod state;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{AppContext, Outputs};
pub use menu::MenuController;
