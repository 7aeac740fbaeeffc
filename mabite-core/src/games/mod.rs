//! Game sessions
//!
//! Each session is a tick-driven state machine: `start` draws its first
//! screen, then `poll` is called once per tick with fresh input until it
//! returns [`Poll::Ready`] with the session's result. A session owns the
//! display, speaker and lights for its whole lifetime and records its
//! own result on the score board before finishing.

use core::task::Poll;

use crate::config::ConsoleConfig;
use crate::context::{AppContext, Outputs};
use crate::input::InputFrame;

pub mod global;
pub mod reaction;
pub mod scores;
pub mod simon;
pub mod timing;

pub use global::{global_score, GlobalChallenge, Stage};
pub use reaction::{ReactionGame, TrialLog, TrialResult};
pub use scores::ScoreScreen;
pub use simon::SimonGame;
pub use timing::TimingGame;

/// Result of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Simon round counter at the first mismatch
    Sequence { score: u32 },
    /// Distance from the 10 s target
    Timing { deviation_ms: u32 },
    /// Mean of the ten recorded trials, in microseconds
    Reaction { mean_us: u32 },
    /// Composite score
    Global { score: u32 },
    /// Informational screen, no result
    Shown,
}

/// A running game or screen
pub trait Session {
    /// Draw the first screen and arm timers
    fn start(&mut self, ctx: &mut AppContext, out: &mut Outputs<'_>, now_ms: u32);

    /// Advance by one tick
    fn poll(&mut self, ctx: &mut AppContext, out: &mut Outputs<'_>, input: &InputFrame)
        -> Poll<Outcome>;

    /// Button settle delay the sampler should use for this session
    fn settle_ms(&self, config: &ConsoleConfig) -> u32;
}
