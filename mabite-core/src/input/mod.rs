//! Input sampling and debouncing
//!
//! Raw levels come from an [`InputPort`](crate::traits::InputPort); this
//! module turns them into accepted button edges, confirm triggers and a
//! dial-selected menu option.

pub mod debounce;
pub mod dial;
pub mod sampler;

pub use debounce::{ConfirmTrigger, EdgeDetector};
pub use dial::{option_for_dial, DialTracker};
pub use sampler::{InputFrame, InputSampler};
