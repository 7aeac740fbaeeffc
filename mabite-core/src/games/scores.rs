//! Best-score screen

use core::task::Poll;

use heapless::String;

use super::{Outcome, Session};
use crate::config::pitches::NOTE_A4;
use crate::config::ConsoleConfig;
use crate::context::{AppContext, Outputs};
use crate::input::InputFrame;
use crate::scheduler::{MelodyPlayer, Note, Timer, Tune};
use crate::score::{ScoreBoard, ScoreKind};
use crate::traits::display::{format_seconds, format_text};
use crate::traits::{DisplayError, TextSize};

static CHIME: [Note; 1] = [Note::new(NOTE_A4, 200, 250)];

/// One score board line, `-` when the best is unset
pub fn score_row(board: &ScoreBoard, kind: ScoreKind) -> Result<String<24>, DisplayError> {
    let best = board.best(kind);
    match (kind, best) {
        (ScoreKind::Sequence, Some(v)) => format_text(format_args!("Simon: {}", v)),
        (ScoreKind::Sequence, None) => format_text(format_args!("Simon: -")),
        (ScoreKind::TimingDeviation, Some(v)) => format_text(format_args!("Timer: {} ms", v)),
        (ScoreKind::TimingDeviation, None) => format_text(format_args!("Timer: - ms")),
        (ScoreKind::ReactionMean, Some(v)) => {
            let secs: String<12> = format_seconds(v, "")?;
            format_text(format_args!("Reflex: {} s", secs))
        }
        (ScoreKind::ReactionMean, None) => format_text(format_args!("Reflex: - s")),
        (ScoreKind::Global, Some(v)) => format_text(format_args!("Global: {}", v)),
        (ScoreKind::Global, None) => format_text(format_args!("Global: -")),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Chime,
    Hold(Timer),
    Done,
}

/// Shows the four bests for a few seconds
#[derive(Debug, Clone)]
pub struct ScoreScreen {
    phase: Phase,
    melody: MelodyPlayer,
}

impl Default for ScoreScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreScreen {
    pub fn new() -> Self {
        Self {
            phase: Phase::Done,
            melody: MelodyPlayer::new(),
        }
    }
}

impl Session for ScoreScreen {
    fn start(&mut self, ctx: &mut AppContext, out: &mut Outputs<'_>, now_ms: u32) {
        let board = ctx.scores;
        out.quiet();
        out.render(|d| {
            d.clear()?;
            for (row, kind) in ScoreKind::ALL.into_iter().enumerate() {
                let text = score_row(&board, kind)?;
                d.draw_text(0, row as u8 * 15, TextSize::Small, &text)?;
            }
            d.flush()
        });
        self.melody.start(Tune::Notes(&CHIME), out.audio, now_ms);
        self.phase = Phase::Chime;
    }

    fn poll(
        &mut self,
        ctx: &mut AppContext,
        out: &mut Outputs<'_>,
        input: &InputFrame,
    ) -> Poll<Outcome> {
        let now = input.now_ms;
        match self.phase {
            Phase::Chime => {
                if self.melody.poll(out.audio, now) {
                    self.phase = Phase::Hold(Timer::after(now, ctx.config.menu.scoreboard_hold_ms));
                }
            }
            Phase::Hold(timer) => {
                if timer.is_expired(now) {
                    self.phase = Phase::Done;
                    return Poll::Ready(Outcome::Shown);
                }
            }
            Phase::Done => return Poll::Ready(Outcome::Shown),
        }
        Poll::Pending
    }

    fn settle_ms(&self, config: &ConsoleConfig) -> u32 {
        config.menu.confirm_debounce_ms
    }
}
