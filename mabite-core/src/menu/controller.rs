//! Menu controller
//!
//! Owns the console state machine. In the menu it maps the dial to the
//! highlighted option and launches the selected session on confirm;
//! while a session runs it forwards every tick to that session and
//! brings the menu back when the session ends.

use core::task::Poll;

#[cfg(feature = "defmt")]
use defmt::{debug, info};

use super::view::render_menu;
use crate::context::{AppContext, Outputs};
use crate::games::{
    GlobalChallenge, Outcome, ReactionGame, ScoreScreen, Session, SimonGame, TimingGame,
};
use crate::input::{ConfirmTrigger, DialTracker, InputSampler};
use crate::scheduler::Timer;
use crate::state::{ConsoleEvent, ConsoleState, GameMode};
use crate::traits::InputPort;

/// The session currently owning the outputs
#[derive(Debug, Clone)]
enum ActiveSession {
    Idle,
    Simon(SimonGame),
    Timing(TimingGame),
    Reaction(ReactionGame),
    Global(GlobalChallenge),
    Scores(ScoreScreen),
}

impl ActiveSession {
    fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Simon => ActiveSession::Simon(SimonGame::new()),
            GameMode::Timing => ActiveSession::Timing(TimingGame::new()),
            GameMode::Reaction => ActiveSession::Reaction(ReactionGame::new()),
            GameMode::Global => ActiveSession::Global(GlobalChallenge::new()),
            GameMode::ScoreBoard => ActiveSession::Scores(ScoreScreen::new()),
        }
    }

    fn as_session(&mut self) -> Option<&mut dyn Session> {
        match self {
            ActiveSession::Idle => None,
            ActiveSession::Simon(s) => Some(s),
            ActiveSession::Timing(s) => Some(s),
            ActiveSession::Reaction(s) => Some(s),
            ActiveSession::Global(s) => Some(s),
            ActiveSession::Scores(s) => Some(s),
        }
    }
}

/// Top-level console controller
#[derive(Debug, Clone)]
pub struct MenuController {
    state: ConsoleState,
    sampler: InputSampler,
    dial: DialTracker,
    confirm: ConfirmTrigger,
    session: ActiveSession,
    pause: Timer,
    last_outcome: Option<Outcome>,
}

impl Default for MenuController {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuController {
    pub fn new() -> Self {
        Self {
            state: ConsoleState::Boot,
            sampler: InputSampler::new(),
            dial: DialTracker::new(),
            confirm: ConfirmTrigger::new(),
            session: ActiveSession::Idle,
            pause: Timer::expired(0),
            last_outcome: None,
        }
    }

    pub fn state(&self) -> ConsoleState {
        self.state
    }

    /// Result of the most recently finished session
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Bring the console up: outputs quiet, menu drawn
    pub fn boot(
        &mut self,
        ctx: &mut AppContext,
        out: &mut Outputs<'_>,
        port: &mut dyn InputPort,
        now_ms: u32,
    ) -> ConsoleEvent {
        self.sampler.sample(port, now_ms, 0);
        out.quiet();
        self.apply(ctx, ConsoleEvent::BootComplete);
        Self::show_menu(ctx, out);
        ConsoleEvent::BootComplete
    }

    /// Advance the console by one tick
    pub fn tick(
        &mut self,
        ctx: &mut AppContext,
        out: &mut Outputs<'_>,
        port: &mut dyn InputPort,
        now_ms: u32,
    ) -> Option<ConsoleEvent> {
        match self.state {
            ConsoleState::Boot => None,
            ConsoleState::Menu => self.tick_menu(ctx, out, port, now_ms),
            ConsoleState::Running(mode) => self.tick_session(ctx, out, port, now_ms, mode),
            ConsoleState::Returning => {
                if self.pause.is_expired(now_ms) {
                    self.apply(ctx, ConsoleEvent::PauseElapsed);
                    Self::show_menu(ctx, out);
                    Some(ConsoleEvent::PauseElapsed)
                } else {
                    None
                }
            }
        }
    }

    fn tick_menu(
        &mut self,
        ctx: &mut AppContext,
        out: &mut Outputs<'_>,
        port: &mut dyn InputPort,
        now_ms: u32,
    ) -> Option<ConsoleEvent> {
        let cfg = ctx.config.menu;
        let frame = self.sampler.sample(port, now_ms, cfg.confirm_debounce_ms);

        if let Some(option) = self
            .dial
            .update(frame.dial, ctx.menu.selected_option, cfg.dial_noise_threshold)
        {
            ctx.menu.selected_option = option;
            Self::show_menu(ctx, out);
        }

        if !self
            .confirm
            .update(frame.confirm_level, now_ms, cfg.confirm_debounce_ms)
        {
            return None;
        }

        let mode = ctx.menu.selected_mode();
        #[cfg(feature = "defmt")]
        info!("Launching {}", mode);

        let event = ConsoleEvent::Launch(mode);
        self.apply(ctx, event);
        self.sampler.rearm();
        self.session = ActiveSession::for_mode(mode);
        if let Some(session) = self.session.as_session() {
            session.start(ctx, out, now_ms);
        }
        Some(event)
    }

    fn tick_session(
        &mut self,
        ctx: &mut AppContext,
        out: &mut Outputs<'_>,
        port: &mut dyn InputPort,
        now_ms: u32,
        mode: GameMode,
    ) -> Option<ConsoleEvent> {
        let session = self.session.as_session()?;
        let settle = session.settle_ms(&ctx.config);
        let frame = self.sampler.sample(port, now_ms, settle);

        let Poll::Ready(outcome) = session.poll(ctx, out, &frame) else {
            return None;
        };

        #[cfg(feature = "defmt")]
        debug!("{} finished: {}", mode, outcome);
        self.last_outcome = Some(outcome);
        self.session = ActiveSession::Idle;
        out.quiet();

        let event = ConsoleEvent::SessionFinished(mode);
        self.apply(ctx, event);
        match self.state {
            ConsoleState::Returning => {
                self.pause = Timer::after(now_ms, ctx.config.menu.return_pause_ms);
            }
            _ => Self::show_menu(ctx, out),
        }
        Some(event)
    }

    fn apply(&mut self, ctx: &mut AppContext, event: ConsoleEvent) {
        self.state = self.state.transition(event);
        ctx.menu.in_menu = self.state.in_menu();
    }

    fn show_menu(ctx: &AppContext, out: &mut Outputs<'_>) {
        let menu = ctx.menu;
        out.render(|d| render_menu(d, &menu));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConsoleConfig;
    use crate::score::ScoreKind;
    use crate::testing::{Rig, STEP_MS};
    use crate::traits::Channel;

    struct Console {
        rig: Rig,
        ctx: AppContext,
        menu: MenuController,
        now: u32,
        events: Vec<ConsoleEvent>,
    }

    impl Console {
        fn boot() -> Self {
            let mut rig = Rig::new();
            let mut ctx = AppContext::new(ConsoleConfig::default(), 9);
            let mut menu = MenuController::new();
            let (mut out, input) = rig.split();
            menu.boot(&mut ctx, &mut out, input, 1000);
            Self {
                rig,
                ctx,
                menu,
                now: 1000,
                events: Vec::new(),
            }
        }

        fn run_for(&mut self, ms: u32) {
            let end = self.now + ms;
            while self.now < end {
                self.now += STEP_MS;
                let (mut out, input) = self.rig.split();
                if let Some(e) = self.menu.tick(&mut self.ctx, &mut out, input, self.now) {
                    self.events.push(e);
                }
            }
        }

        fn launch(&mut self, dial: u16) {
            self.rig.input.set_dial(dial);
            self.run_for(20);
            self.rig.input.set_confirm(true);
            self.run_for(10);
            self.rig.input.set_confirm(false);
        }
    }

    #[test]
    fn test_boot_shows_menu() {
        let c = Console::boot();
        assert_eq!(c.menu.state(), ConsoleState::Menu);
        assert!(c.ctx.menu.in_menu);
        assert!(c.rig.display.showing("[MABITE]"));
        assert_eq!(c.rig.display.highlighted(), Some("1. LED GAME"));
        assert!(c.rig.lights.all_dark());
    }

    #[test]
    fn test_dial_moves_highlight() {
        let mut c = Console::boot();
        c.rig.input.set_dial(4095);
        c.run_for(10);
        assert_eq!(c.ctx.menu.selected_option, 5);
        assert_eq!(c.rig.display.highlighted(), Some("5. SCORE BOARD"));

        let flushes = c.rig.display.flushes;
        c.run_for(500);
        assert_eq!(c.rig.display.flushes, flushes);

        c.rig.input.set_dial(2100);
        c.run_for(10);
        assert_eq!(c.rig.display.highlighted(), Some("3. REFLEX CHALLENGE"));
    }

    #[test]
    fn test_dial_noise_redraws_without_option_change() {
        let mut c = Console::boot();
        let flushes = c.rig.display.flushes;
        c.rig.input.set_dial(150);
        c.run_for(10);
        assert_eq!(c.rig.display.flushes, flushes);
        c.rig.input.set_dial(250);
        c.run_for(10);
        assert_eq!(c.rig.display.flushes, flushes + 1);
        assert_eq!(c.ctx.menu.selected_option, 1);
    }

    #[test]
    fn test_confirm_launches_selected_mode() {
        let mut c = Console::boot();
        c.launch(1500);
        assert_eq!(c.menu.state(), ConsoleState::Running(GameMode::Timing));
        assert!(!c.ctx.menu.in_menu);
        assert!(c.rig.display.showing("READY ?"));
        assert_eq!(c.events, [ConsoleEvent::Launch(GameMode::Timing)]);

        // The dial is ignored while a session runs
        let flushes = c.rig.display.flushes;
        c.rig.input.set_dial(4095);
        c.run_for(100);
        assert_eq!(c.rig.display.flushes, flushes);
        assert_eq!(c.ctx.menu.selected_option, 2);
    }

    #[test]
    fn test_score_board_returns_without_pause() {
        let mut c = Console::boot();
        c.ctx.scores.submit(ScoreKind::Global, 383);
        c.launch(4095);
        assert!(c.rig.display.showing("Global: 383"));

        c.run_for(5300);
        assert_eq!(c.menu.state(), ConsoleState::Menu);
        assert!(c.ctx.menu.in_menu);
        assert!(c.rig.display.showing("[MABITE]"));
        assert_eq!(c.menu.last_outcome(), Some(Outcome::Shown));
    }

    #[test]
    fn test_single_game_pauses_before_menu() {
        let mut c = Console::boot();
        c.launch(0);
        assert_eq!(c.menu.state(), ConsoleState::Running(GameMode::Simon));

        // Wait for playback, then press a wrong button
        c.run_for(2000);
        let lit = c.rig.lights.switched_on[0];
        let wrong = Channel::ALL[(lit.index() + 1) % 4];
        c.rig.input.press(wrong);
        c.run_for(60);
        c.rig.input.release(wrong);
        c.run_for(4600);
        assert_eq!(c.menu.state(), ConsoleState::Returning);
        assert_eq!(c.menu.last_outcome(), Some(Outcome::Sequence { score: 1 }));
        assert!(c.rig.display.showing("GAME OVER"));

        c.run_for(1000);
        assert_eq!(c.menu.state(), ConsoleState::Menu);
        assert!(c.rig.display.showing("[MABITE]"));
        assert_eq!(c.ctx.scores.best_sequence_length(), 1);
        assert_eq!(
            c.events,
            [
                ConsoleEvent::Launch(GameMode::Simon),
                ConsoleEvent::SessionFinished(GameMode::Simon),
                ConsoleEvent::PauseElapsed,
            ]
        );
    }
}
