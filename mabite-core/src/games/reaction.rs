//! Reaction time game
//!
//! Ten recorded trials. Each trial lights a random channel and times the
//! player's press on the matching button. A wrong button costs a pause
//! but records nothing; the trial then waits again with the stimulus dark
//! and its stopwatch still running. There is no timeout.

use core::task::Poll;

#[cfg(feature = "defmt")]
use defmt::{debug, info};

use super::{Outcome, Session};
use crate::config::pitches::*;
use crate::config::{ConsoleConfig, REACTION_TRIALS};
use crate::context::{AppContext, Outputs};
use crate::input::InputFrame;
use crate::scheduler::{MelodyPlayer, Note, Stopwatch, Timer, Tune};
use crate::score::ScoreKind;
use crate::traits::display::format_seconds;
use crate::traits::{Channel, PresenterExt, TextSize};

static HIT: [Note; 1] = [Note::new(NOTE_C5, 100, 150)];
static ERROR: [Note; 1] = [Note::new(NOTE_G3, 300, 500)];
static MEAN: [Note; 3] = [
    Note::new(NOTE_E5, 200, 250),
    Note::new(NOTE_G5, 200, 250),
    Note::new(NOTE_C6, 400, 400),
];

/// Round a microsecond mean to whole milliseconds
pub fn mean_ms(mean_us: u32) -> u32 {
    mean_us.saturating_add(500) / 1000
}

/// Recorded reaction times of one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrialLog {
    times_ms: [u32; REACTION_TRIALS],
    len: usize,
}

impl TrialLog {
    pub const fn new() -> Self {
        Self {
            times_ms: [0; REACTION_TRIALS],
            len: 0,
        }
    }

    /// Append a time; returns `false` once all trials are filled
    pub fn record(&mut self, reaction_ms: u32) -> bool {
        match self.times_ms.get_mut(self.len) {
            Some(slot) => {
                *slot = reaction_ms;
                self.len += 1;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_complete(&self) -> bool {
        self.len == REACTION_TRIALS
    }

    pub fn times_ms(&self) -> &[u32] {
        &self.times_ms[..self.len]
    }

    pub fn last_ms(&self) -> Option<u32> {
        self.times_ms().last().copied()
    }

    /// Arithmetic mean in microseconds (0 when empty)
    pub fn mean_us(&self) -> u32 {
        if self.len == 0 {
            return 0;
        }
        let sum: u64 = self.times_ms().iter().map(|&t| t as u64).sum();
        let mean = sum * 1000 / self.len as u64;
        mean.min(u32::MAX as u64) as u32
    }
}

/// How an accepted press compares with the stimulus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TrialResult {
    Matched { reaction_ms: u32 },
    Mismatched,
}

impl TrialResult {
    pub fn judge(target: Channel, pressed: Channel, reaction_ms: u32) -> Self {
        if pressed == target {
            TrialResult::Matched { reaction_ms }
        } else {
            TrialResult::Mismatched
        }
    }
}

/// What follows the post-press pause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resume {
    NextTrial,
    Retry { target: Channel, watch: Stopwatch },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Intro(Timer),
    Waiting { target: Channel, watch: Stopwatch },
    Feedback(Resume),
    Pause(Timer, Resume),
    LastTrial(Timer),
    MeanFeedback,
    Hold(Timer),
    Done,
}

/// Reflex challenge session
#[derive(Debug, Clone)]
pub struct ReactionGame {
    phase: Phase,
    log: TrialLog,
    misses: u32,
    melody: MelodyPlayer,
}

impl Default for ReactionGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ReactionGame {
    pub fn new() -> Self {
        Self {
            phase: Phase::Done,
            log: TrialLog::new(),
            misses: 0,
            melody: MelodyPlayer::new(),
        }
    }

    pub fn log(&self) -> &TrialLog {
        &self.log
    }

    /// Wrong presses so far
    pub fn misses(&self) -> u32 {
        self.misses
    }

    /// Channel the current trial is waiting for
    pub fn target(&self) -> Option<Channel> {
        match self.phase {
            Phase::Waiting { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.target().is_some()
    }

    fn arm(&mut self, ctx: &mut AppContext, out: &mut Outputs<'_>, now_ms: u32) {
        let target = ctx.random_channel();
        out.lights.set(target, true);
        out.audio
            .play_tone(target.tone_hz(), ctx.config.reaction.stimulus_tone_ms);
        self.phase = Phase::Waiting {
            target,
            watch: Stopwatch::start(now_ms),
        };
    }

    fn judge(
        &mut self,
        out: &mut Outputs<'_>,
        now_ms: u32,
        target: Channel,
        watch: Stopwatch,
        pressed: Channel,
        rearm_after_miss: bool,
    ) {
        out.lights.set(target, false);
        out.audio.stop();

        match TrialResult::judge(target, pressed, watch.elapsed_ms(now_ms)) {
            TrialResult::Matched { reaction_ms } => {
                self.log.record(reaction_ms);
                let trial = self.log.len();
                #[cfg(feature = "defmt")]
                debug!("Trial {}: {} ms", trial, reaction_ms);

                out.render(|d| {
                    d.clear()?;
                    let text: heapless::String<12> = format_seconds(reaction_ms, "s")?;
                    d.draw_text(20, 15, TextSize::Medium, &text)?;
                    d.draw_fmt(
                        10,
                        45,
                        TextSize::Small,
                        format_args!("Try {}/{}", trial, REACTION_TRIALS),
                    )?;
                    d.flush()
                });
                self.melody.start(Tune::Notes(&HIT), out.audio, now_ms);
                self.phase = Phase::Feedback(Resume::NextTrial);
            }
            TrialResult::Mismatched => {
                self.misses += 1;
                out.render(|d| d.show_text(25, 25, TextSize::Medium, "ERROR!"));
                self.melody.start(Tune::Notes(&ERROR), out.audio, now_ms);
                let resume = if rearm_after_miss {
                    Resume::NextTrial
                } else {
                    Resume::Retry { target, watch }
                };
                self.phase = Phase::Feedback(resume);
            }
        }
    }

    fn show_value(out: &mut Outputs<'_>, caption: &str, ms: u32) {
        out.render(|d| {
            let value: heapless::String<12> = format_seconds(ms, "s")?;
            d.show_caption_value((5, 10, TextSize::Medium, caption), (15, 35, &value))
        });
    }
}

impl Session for ReactionGame {
    fn start(&mut self, ctx: &mut AppContext, out: &mut Outputs<'_>, now_ms: u32) {
        self.log = TrialLog::new();
        self.misses = 0;
        self.melody.cancel(out.audio);

        out.render(|d| {
            d.clear()?;
            d.draw_text(10, 20, TextSize::Medium, "REFLEX")?;
            d.draw_text(0, 36, TextSize::Medium, "CHALLENGE")?;
            d.flush()
        });
        out.quiet();
        self.phase = Phase::Intro(Timer::after(now_ms, ctx.config.reaction.intro_ms));
    }

    fn poll(
        &mut self,
        ctx: &mut AppContext,
        out: &mut Outputs<'_>,
        input: &InputFrame,
    ) -> Poll<Outcome> {
        let now = input.now_ms;
        let cfg = ctx.config.reaction;

        match self.phase {
            Phase::Intro(timer) => {
                if timer.is_expired(now) {
                    self.arm(ctx, out, now);
                }
            }
            Phase::Waiting { target, watch } => {
                if let Some(pressed) = input.button {
                    self.judge(out, now, target, watch, pressed, cfg.rearm_after_miss);
                }
            }
            Phase::Feedback(resume) => {
                if self.melody.poll(out.audio, now) {
                    self.phase = Phase::Pause(Timer::after(now, cfg.trial_pause_ms), resume);
                }
            }
            Phase::Pause(timer, resume) => {
                if timer.is_expired(now) {
                    if self.log.is_complete() {
                        let last = self.log.last_ms().unwrap_or(0);
                        Self::show_value(out, "10th Try:", last);
                        self.phase = Phase::LastTrial(Timer::after(now, cfg.last_trial_hold_ms));
                    } else {
                        match resume {
                            Resume::NextTrial => self.arm(ctx, out, now),
                            Resume::Retry { target, watch } => {
                                self.phase = Phase::Waiting { target, watch }
                            }
                        }
                    }
                }
            }
            Phase::LastTrial(timer) => {
                if timer.is_expired(now) {
                    let mean_us = self.log.mean_us();
                    #[cfg(feature = "defmt")]
                    info!("Reaction mean {} us over {} misses", mean_us, self.misses);
                    Self::show_value(out, "MEAN:", mean_ms(mean_us));
                    self.melody.start(Tune::Notes(&MEAN), out.audio, now);
                    self.phase = Phase::MeanFeedback;
                }
            }
            Phase::MeanFeedback => {
                if self.melody.poll(out.audio, now) {
                    self.phase = Phase::Hold(Timer::after(now, cfg.result_hold_ms));
                }
            }
            Phase::Hold(timer) => {
                if timer.is_expired(now) {
                    let mean_us = self.log.mean_us();
                    ctx.scores.submit(ScoreKind::ReactionMean, mean_ms(mean_us));
                    self.phase = Phase::Done;
                    return Poll::Ready(Outcome::Reaction { mean_us });
                }
            }
            Phase::Done => {
                return Poll::Ready(Outcome::Reaction {
                    mean_us: self.log.mean_us(),
                })
            }
        }
        Poll::Pending
    }

    fn settle_ms(&self, config: &ConsoleConfig) -> u32 {
        config.reaction.settle_ms
    }
}
