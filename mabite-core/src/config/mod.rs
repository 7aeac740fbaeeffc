//! Console configuration
//!
//! All tunables are compiled in. There is no persisted configuration.

pub mod pitches;
pub mod types;

pub use types::*;
