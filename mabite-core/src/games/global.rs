//! Global cognitive challenge
//!
//! Runs Simon, the timing game and the reaction game back to back, then
//! folds their results into one composite score. Each sub-game still
//! records its own best.

use core::task::Poll;

#[cfg(feature = "defmt")]
use defmt::info;

use super::{Outcome, ReactionGame, Session, SimonGame, TimingGame};
use crate::config::pitches::*;
use crate::config::ConsoleConfig;
use crate::context::{AppContext, Outputs};
use crate::input::InputFrame;
use crate::scheduler::{MelodyPlayer, Note, Timer, Tune};
use crate::score::ScoreKind;
use crate::traits::{PresenterExt, TextSize};

static FANFARE: [Note; 9] = [
    Note::new(NOTE_C6, 200, 250),
    Note::new(NOTE_E6, 200, 250),
    Note::new(NOTE_G6, 400, 500),
    Note::new(NOTE_C6, 200, 250),
    Note::new(NOTE_E6, 200, 250),
    Note::new(NOTE_G6, 400, 500),
    Note::new(NOTE_C6, 200, 250),
    Note::new(NOTE_E6, 200, 250),
    Note::new(NOTE_G6, 400, 500),
];

/// Composite score
///
/// `simon * 10 + 1000 / deviation_ms + 1000 / (mean_s * 10)`, each
/// quotient floored and taken as 0 when its divisor is 0. With the mean
/// carried in microseconds the last term is `100_000_000 / mean_us`.
pub fn global_score(simon_score: u32, deviation_ms: u32, mean_us: u32) -> u32 {
    let timing = 1000u32.checked_div(deviation_ms).unwrap_or(0);
    let reaction = 100_000_000u32.checked_div(mean_us).unwrap_or(0);
    simon_score
        .saturating_mul(10)
        .saturating_add(timing)
        .saturating_add(reaction)
}

/// Which part of the challenge is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    Intro,
    Simon,
    Timing,
    Reaction,
    Result,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Intro(Timer),
    Simon,
    /// Pause before the next stage starts
    Gap(Timer, Stage),
    Timing,
    Reaction,
    Fanfare,
    Hold(Timer),
    Done,
}

/// Global challenge session
#[derive(Debug, Clone)]
pub struct GlobalChallenge {
    phase: Phase,
    simon: SimonGame,
    timing: TimingGame,
    reaction: ReactionGame,
    melody: MelodyPlayer,
    simon_score: u32,
    deviation_ms: u32,
    mean_us: u32,
    score: u32,
}

impl Default for GlobalChallenge {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalChallenge {
    pub fn new() -> Self {
        Self {
            phase: Phase::Done,
            simon: SimonGame::new(),
            timing: TimingGame::new(),
            reaction: ReactionGame::new(),
            melody: MelodyPlayer::new(),
            simon_score: 0,
            deviation_ms: 0,
            mean_us: 0,
            score: 0,
        }
    }

    pub fn stage(&self) -> Stage {
        match self.phase {
            Phase::Intro(_) => Stage::Intro,
            Phase::Simon => Stage::Simon,
            Phase::Timing => Stage::Timing,
            Phase::Reaction => Stage::Reaction,
            Phase::Gap(_, next) => match next {
                Stage::Timing => Stage::Simon,
                Stage::Reaction => Stage::Timing,
                _ => Stage::Reaction,
            },
            Phase::Fanfare | Phase::Hold(_) => Stage::Result,
            Phase::Done => Stage::Done,
        }
    }

    pub fn simon(&self) -> &SimonGame {
        &self.simon
    }

    pub fn timing(&self) -> &TimingGame {
        &self.timing
    }

    pub fn reaction(&self) -> &ReactionGame {
        &self.reaction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    fn begin(&mut self, stage: Stage, ctx: &mut AppContext, out: &mut Outputs<'_>, now_ms: u32) {
        match stage {
            Stage::Timing => {
                self.timing.start(ctx, out, now_ms);
                self.phase = Phase::Timing;
            }
            Stage::Reaction => {
                self.reaction.start(ctx, out, now_ms);
                self.phase = Phase::Reaction;
            }
            _ => self.finish(out, now_ms),
        }
    }

    fn finish(&mut self, out: &mut Outputs<'_>, now_ms: u32) {
        self.score = global_score(self.simon_score, self.deviation_ms, self.mean_us);
        #[cfg(feature = "defmt")]
        info!(
            "Global: simon {} + timing {} ms + reaction {} us = {}",
            self.simon_score, self.deviation_ms, self.mean_us, self.score
        );

        let score = self.score;
        out.render(|d| {
            d.clear()?;
            d.draw_text(5, 5, TextSize::Small, "GLOBAL SCORE:")?;
            d.draw_fmt(20, 30, TextSize::Large, format_args!("{}", score))?;
            d.flush()
        });
        self.melody.start(Tune::Notes(&FANFARE), out.audio, now_ms);
        self.phase = Phase::Fanfare;
    }

    fn gap(&mut self, ctx: &AppContext, now_ms: u32, next: Stage) {
        self.phase = Phase::Gap(Timer::after(now_ms, ctx.config.global.between_games_ms), next);
    }
}

impl Session for GlobalChallenge {
    fn start(&mut self, ctx: &mut AppContext, out: &mut Outputs<'_>, now_ms: u32) {
        self.simon_score = 0;
        self.deviation_ms = 0;
        self.mean_us = 0;
        self.score = 0;
        self.melody.cancel(out.audio);
        out.quiet();
        out.render(|d| {
            d.clear()?;
            d.draw_text(5, 10, TextSize::Medium, "GLOBAL")?;
            d.draw_text(0, 26, TextSize::Medium, "COGNITIVE")?;
            d.flush()
        });
        self.phase = Phase::Intro(Timer::after(now_ms, ctx.config.global.intro_ms));
    }

    fn poll(
        &mut self,
        ctx: &mut AppContext,
        out: &mut Outputs<'_>,
        input: &InputFrame,
    ) -> Poll<Outcome> {
        let now = input.now_ms;

        match self.phase {
            Phase::Intro(timer) => {
                if timer.is_expired(now) {
                    self.simon.start(ctx, out, now);
                    self.phase = Phase::Simon;
                }
            }
            Phase::Simon => {
                if let Poll::Ready(Outcome::Sequence { score }) = self.simon.poll(ctx, out, input) {
                    self.simon_score = score;
                    self.gap(ctx, now, Stage::Timing);
                }
            }
            Phase::Timing => {
                if let Poll::Ready(Outcome::Timing { deviation_ms }) =
                    self.timing.poll(ctx, out, input)
                {
                    self.deviation_ms = deviation_ms;
                    self.gap(ctx, now, Stage::Reaction);
                }
            }
            Phase::Reaction => {
                if let Poll::Ready(Outcome::Reaction { mean_us }) =
                    self.reaction.poll(ctx, out, input)
                {
                    self.mean_us = mean_us;
                    self.gap(ctx, now, Stage::Result);
                }
            }
            Phase::Gap(timer, next) => {
                if timer.is_expired(now) {
                    self.begin(next, ctx, out, now);
                }
            }
            Phase::Fanfare => {
                if self.melody.poll(out.audio, now) {
                    ctx.scores.submit(ScoreKind::Global, self.score);
                    self.phase = Phase::Hold(Timer::after(now, ctx.config.global.result_hold_ms));
                }
            }
            Phase::Hold(timer) => {
                if timer.is_expired(now) {
                    self.phase = Phase::Done;
                    return Poll::Ready(Outcome::Global { score: self.score });
                }
            }
            Phase::Done => return Poll::Ready(Outcome::Global { score: self.score }),
        }
        Poll::Pending
    }

    fn settle_ms(&self, config: &ConsoleConfig) -> u32 {
        match self.phase {
            Phase::Timing => self.timing.settle_ms(config),
            Phase::Reaction => self.reaction.settle_ms(config),
            _ => self.simon.settle_ms(config),
        }
    }
}
