//! Precision timing game
//!
//! The player presses confirm as close to 10.000 s after the go cue as
//! possible. The running time is shown for the first few seconds only.

use core::task::Poll;

#[cfg(feature = "defmt")]
use defmt::info;

use super::{Outcome, Session};
use crate::config::pitches::*;
use crate::config::{ConsoleConfig, TimingConfig};
use crate::context::{AppContext, Outputs};
use crate::input::InputFrame;
use crate::scheduler::{MelodyPlayer, Note, Stopwatch, Timer, Tune};
use crate::score::ScoreKind;
use crate::traits::display::format_seconds;
use crate::traits::{PresenterExt, TextSize};

static GO: [Note; 2] = [Note::new(NOTE_C5, 200, 250), Note::new(NOTE_E5, 200, 300)];

static WIN: [Note; 6] = [
    Note::new(NOTE_E5, 150, 195),
    Note::new(NOTE_G5, 150, 195),
    Note::new(NOTE_E6, 300, 390),
    Note::new(NOTE_C6, 300, 390),
    Note::new(NOTE_G5, 300, 390),
    Note::new(NOTE_E5, 500, 650),
];

static MISS: [Note; 2] = [Note::new(NOTE_G3, 200, 250), Note::new(NOTE_DS3, 200, 300)];

/// Distance between a press and the target, in ms
pub fn deviation_ms(elapsed_ms: u32, target_ms: u32) -> u32 {
    elapsed_ms.abs_diff(target_ms)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Ready(Timer),
    /// Go melody; the stopwatch starts when it ends
    Go,
    Counting {
        watch: Stopwatch,
        last_draw: Option<u32>,
        blanked: bool,
    },
    Feedback,
    Hold(Timer),
    Done,
}

/// Ten-second timing session
#[derive(Debug, Clone)]
pub struct TimingGame {
    phase: Phase,
    melody: MelodyPlayer,
    elapsed_ms: Option<u32>,
    deviation_ms: u32,
}

impl Default for TimingGame {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingGame {
    pub fn new() -> Self {
        Self {
            phase: Phase::Done,
            melody: MelodyPlayer::new(),
            elapsed_ms: None,
            deviation_ms: 0,
        }
    }

    /// Measured press time, once the attempt is over
    pub fn elapsed_ms(&self) -> Option<u32> {
        self.elapsed_ms
    }

    pub fn deviation_ms(&self) -> u32 {
        self.deviation_ms
    }

    /// The stopwatch is running
    pub fn is_counting(&self) -> bool {
        matches!(self.phase, Phase::Counting { .. })
    }

    fn count(
        &mut self,
        cfg: &TimingConfig,
        out: &mut Outputs<'_>,
        input: &InputFrame,
        watch: Stopwatch,
        last_draw: Option<u32>,
        blanked: bool,
    ) {
        let now = input.now_ms;
        let elapsed = watch.elapsed_ms(now);

        // An attempt never counts for longer than the timeout
        if input.confirm_edge || elapsed > cfg.timeout_ms {
            self.conclude(cfg, out, now, elapsed.min(cfg.timeout_ms));
            return;
        }

        if elapsed < cfg.live_display_ms {
            let due = last_draw.map_or(true, |at| now.wrapping_sub(at) >= cfg.live_refresh_ms);
            if due {
                out.render(|d| {
                    d.clear()?;
                    let text: heapless::String<12> = format_seconds(elapsed, "")?;
                    d.draw_text(20, 15, TextSize::Medium, &text)?;
                    d.draw_text(95, 25, TextSize::Small, "SEC")?;
                    d.flush()
                });
                self.phase = Phase::Counting {
                    watch,
                    last_draw: Some(now),
                    blanked,
                };
            }
        } else if !blanked {
            out.render(|d| {
                d.clear()?;
                d.flush()
            });
            self.phase = Phase::Counting {
                watch,
                last_draw,
                blanked: true,
            };
        }
    }

    fn conclude(&mut self, cfg: &TimingConfig, out: &mut Outputs<'_>, now_ms: u32, elapsed_ms: u32) {
        let deviation = deviation_ms(elapsed_ms, cfg.target_ms);
        self.elapsed_ms = Some(elapsed_ms);
        self.deviation_ms = deviation;

        #[cfg(feature = "defmt")]
        info!("Timing: pressed at {} ms, off by {} ms", elapsed_ms, deviation);

        if deviation < cfg.win_threshold_ms {
            out.render(|d| d.show_text(25, 20, TextSize::Large, "BRAVO"));
            self.melody.start(Tune::Notes(&WIN), out.audio, now_ms);
        } else {
            out.render(|d| {
                d.clear()?;
                d.draw_text(10, 5, TextSize::Medium, "GAP:")?;
                d.draw_fmt(15, 30, TextSize::Large, format_args!("{}ms", deviation))?;
                d.flush()
            });
            self.melody.start(Tune::Notes(&MISS), out.audio, now_ms);
        }
        self.phase = Phase::Feedback;
    }
}

impl Session for TimingGame {
    fn start(&mut self, ctx: &mut AppContext, out: &mut Outputs<'_>, now_ms: u32) {
        self.elapsed_ms = None;
        self.deviation_ms = 0;
        self.melody.cancel(out.audio);
        out.quiet();
        out.render(|d| d.show_text(15, 20, TextSize::Medium, "READY ?"));
        self.phase = Phase::Ready(Timer::after(now_ms, ctx.config.timing.intro_ms));
    }

    fn poll(
        &mut self,
        ctx: &mut AppContext,
        out: &mut Outputs<'_>,
        input: &InputFrame,
    ) -> Poll<Outcome> {
        let now = input.now_ms;
        let cfg = ctx.config.timing;

        match self.phase {
            Phase::Ready(timer) => {
                if timer.is_expired(now) {
                    out.render(|d| d.show_text(10, 10, TextSize::Small, "GO! PRESS AT 10.000"));
                    self.melody.start(Tune::Notes(&GO), out.audio, now);
                    self.phase = Phase::Go;
                }
            }
            Phase::Go => {
                if self.melody.poll(out.audio, now) {
                    self.phase = Phase::Counting {
                        watch: Stopwatch::start(now),
                        last_draw: None,
                        blanked: false,
                    };
                }
            }
            Phase::Counting {
                watch,
                last_draw,
                blanked,
            } => self.count(&cfg, out, input, watch, last_draw, blanked),
            Phase::Feedback => {
                if self.melody.poll(out.audio, now) {
                    self.phase = Phase::Hold(Timer::after(now, cfg.result_hold_ms));
                }
            }
            Phase::Hold(timer) => {
                if timer.is_expired(now) {
                    ctx.scores.submit(ScoreKind::TimingDeviation, self.deviation_ms);
                    self.phase = Phase::Done;
                    return Poll::Ready(self.outcome());
                }
            }
            Phase::Done => return Poll::Ready(self.outcome()),
        }
        Poll::Pending
    }

    fn settle_ms(&self, config: &ConsoleConfig) -> u32 {
        config.timing.settle_ms
    }
}

impl TimingGame {
    fn outcome(&self) -> Outcome {
        Outcome::Timing {
            deviation_ms: self.deviation_ms,
        }
    }
}
