//! Sequence memory game
//!
//! The console plays a growing sequence of light + tone cues; the player
//! repeats it on the buttons. Each fully repeated round adds one move. The
//! first wrong button ends the session with the current round counter as
//! the score.

use core::task::Poll;

use heapless::Vec;

#[cfg(feature = "defmt")]
use defmt::{debug, info};

use super::{Outcome, Session};
use crate::config::pitches::*;
use crate::config::{ConsoleConfig, MAX_SEQUENCE_LEN};
use crate::context::{AppContext, Outputs};
use crate::input::InputFrame;
use crate::scheduler::{Flasher, MelodyPlayer, Note, Timer, Tune};
use crate::score::ScoreKind;
use crate::traits::{Channel, PresenterExt, TextSize};

static LEVEL_UP: [Note; 6] = [
    Note::legato(NOTE_E4, 150),
    Note::legato(NOTE_G4, 150),
    Note::legato(NOTE_E5, 150),
    Note::legato(NOTE_C5, 150),
    Note::legato(NOTE_D5, 150),
    Note::legato(NOTE_G5, 150),
];

static DIRGE: [Note; 3] = [
    Note::legato(NOTE_DS5, 300),
    Note::legato(NOTE_D5, 300),
    Note::legato(NOTE_CS5, 300),
];

const WARBLE: Tune = Tune::Warble {
    center_hz: NOTE_C5,
    span_hz: 10,
    step_ms: 6,
    cycles: 10,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Intro(Timer),
    /// Console plays the sequence back
    Playback,
    /// Waiting for the move at `pos`
    AwaitInput { pos: usize },
    /// Echoing the player's press before judging it
    Echo { pos: usize, pressed: Channel },
    LevelUp,
    NextRound(Timer),
    Dirge,
    Warble,
    GameOver(Timer),
    Done,
}

/// Simon session
#[derive(Debug, Clone)]
pub struct SimonGame {
    sequence: Vec<Channel, MAX_SEQUENCE_LEN>,
    round: u32,
    cleared: u32,
    phase: Phase,
    flasher: Flasher,
    melody: MelodyPlayer,
}

impl Default for SimonGame {
    fn default() -> Self {
        Self::new()
    }
}

impl SimonGame {
    pub fn new() -> Self {
        Self {
            sequence: Vec::new(),
            round: 1,
            cleared: 0,
            phase: Phase::Done,
            flasher: Flasher::new(0, 0),
            melody: MelodyPlayer::new(),
        }
    }

    /// Moves recorded so far
    pub fn sequence(&self) -> &[Channel] {
        &self.sequence
    }

    /// Round counter; this is the score when the session ends
    pub fn score(&self) -> u32 {
        self.round
    }

    /// Rounds the player repeated without a mistake
    pub fn cleared_rounds(&self) -> u32 {
        self.cleared
    }

    /// The game is waiting for a button press
    pub fn awaiting_input(&self) -> bool {
        matches!(self.phase, Phase::AwaitInput { .. })
    }

    pub fn is_over(&self) -> bool {
        matches!(
            self.phase,
            Phase::Dirge | Phase::Warble | Phase::GameOver(_) | Phase::Done
        )
    }

    /// Append a move; a full sequence stops growing
    fn append_move(&mut self, ch: Channel) -> bool {
        self.sequence.push(ch).is_ok()
    }

    fn begin_round(&mut self, ctx: &mut AppContext, out: &mut Outputs<'_>, now_ms: u32) {
        let round = self.round;
        out.render(|d| {
            d.clear()?;
            d.draw_fmt(40, 20, TextSize::Large, format_args!("{}", round))?;
            d.flush()
        });

        let ch = ctx.random_channel();
        if !self.append_move(ch) {
            #[cfg(feature = "defmt")]
            debug!("Sequence full at {} moves", self.sequence.len());
        }

        self.flasher
            .start(&self.sequence, out.audio, out.lights, now_ms);
        self.phase = Phase::Playback;
    }

    fn game_over(&mut self, out: &mut Outputs<'_>, now_ms: u32) {
        let score = self.round;
        #[cfg(feature = "defmt")]
        info!("Simon over: score {}, {} rounds cleared", score, self.cleared);

        out.render(|d| {
            d.clear()?;
            d.draw_text(10, 10, TextSize::Medium, "GAME OVER")?;
            d.draw_fmt(40, 35, TextSize::Large, format_args!("{}", score))?;
            d.flush()
        });
        self.melody.start(Tune::Notes(&DIRGE), out.audio, now_ms);
        self.phase = Phase::Dirge;
    }
}

impl Session for SimonGame {
    fn start(&mut self, ctx: &mut AppContext, out: &mut Outputs<'_>, now_ms: u32) {
        let cfg = ctx.config.simon;
        self.sequence.clear();
        self.round = 1;
        self.cleared = 0;
        self.flasher = Flasher::new(cfg.cue_on_ms, cfg.cue_gap_ms);
        self.melody.cancel(out.audio);

        out.quiet();
        out.render(|d| d.show_text(20, 20, TextSize::Medium, "SIMON"));
        self.phase = Phase::Intro(Timer::after(now_ms, cfg.intro_ms));
    }

    fn poll(
        &mut self,
        ctx: &mut AppContext,
        out: &mut Outputs<'_>,
        input: &InputFrame,
    ) -> Poll<Outcome> {
        let now = input.now_ms;
        let cfg = ctx.config.simon;

        match self.phase {
            Phase::Intro(timer) => {
                if timer.is_expired(now) {
                    self.begin_round(ctx, out, now);
                }
            }
            Phase::Playback => {
                if self.flasher.poll(&self.sequence, out.audio, out.lights, now) {
                    self.phase = Phase::AwaitInput { pos: 0 };
                }
            }
            Phase::AwaitInput { pos } => {
                if let Some(pressed) = input.button {
                    self.flasher.start(&[pressed], out.audio, out.lights, now);
                    self.phase = Phase::Echo { pos, pressed };
                }
            }
            Phase::Echo { pos, pressed } => {
                if self.flasher.poll(&[pressed], out.audio, out.lights, now) {
                    if self.sequence.get(pos) != Some(&pressed) {
                        self.game_over(out, now);
                    } else if pos + 1 >= self.sequence.len() {
                        self.cleared += 1;
                        self.melody.start(Tune::Notes(&LEVEL_UP), out.audio, now);
                        self.phase = Phase::LevelUp;
                    } else {
                        self.phase = Phase::AwaitInput { pos: pos + 1 };
                    }
                }
            }
            Phase::LevelUp => {
                if self.melody.poll(out.audio, now) {
                    self.phase = Phase::NextRound(Timer::after(now, cfg.level_up_pause_ms));
                }
            }
            Phase::NextRound(timer) => {
                if timer.is_expired(now) {
                    self.round += 1;
                    self.begin_round(ctx, out, now);
                }
            }
            Phase::Dirge => {
                if self.melody.poll(out.audio, now) {
                    self.melody.start(WARBLE, out.audio, now);
                    self.phase = Phase::Warble;
                }
            }
            Phase::Warble => {
                if self.melody.poll(out.audio, now) {
                    self.phase = Phase::GameOver(Timer::after(now, cfg.game_over_hold_ms));
                }
            }
            Phase::GameOver(timer) => {
                if timer.is_expired(now) {
                    ctx.scores.submit(ScoreKind::Sequence, self.round);
                    self.phase = Phase::Done;
                    return Poll::Ready(Outcome::Sequence { score: self.round });
                }
            }
            Phase::Done => return Poll::Ready(Outcome::Sequence { score: self.round }),
        }
        Poll::Pending
    }

    fn settle_ms(&self, config: &ConsoleConfig) -> u32 {
        config.simon.settle_ms
    }
}
