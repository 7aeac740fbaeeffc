//! Recording fakes and a simulated-clock driver for unit tests

use core::task::Poll;

use crate::config::ConsoleConfig;
use crate::context::{AppContext, Outputs};
use crate::games::{Outcome, Session};
use crate::input::InputSampler;
use crate::traits::{
    AudioCue, Channel, DisplayError, InputLine, InputPort, Level, Presenter, StimulusLights,
    TextSize,
};

/// Tick period used by [`Driver`]
pub const STEP_MS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnText {
    pub x: u8,
    pub y: u8,
    pub size: TextSize,
    pub text: String,
    pub highlighted: bool,
}

/// Presenter that keeps the last visible frame and every text ever shown
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pending: Vec<DrawnText>,
    pub frame: Vec<DrawnText>,
    pub history: Vec<String>,
    pub flushes: usize,
    pub fail_next_flush: bool,
}

impl RecordingDisplay {
    /// Text is on the visible frame
    pub fn showing(&self, text: &str) -> bool {
        self.frame.iter().any(|t| t.text == text)
    }

    /// Text was on any flushed frame
    pub fn ever_shown(&self, text: &str) -> bool {
        self.history.iter().any(|t| t == text)
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.frame.iter().find(|t| t.highlighted).map(|t| t.text.as_str())
    }

    pub fn is_blank(&self) -> bool {
        self.frame.is_empty()
    }

    fn push(&mut self, x: u8, y: u8, size: TextSize, text: &str, highlighted: bool) {
        self.pending.push(DrawnText {
            x,
            y,
            size,
            text: text.to_string(),
            highlighted,
        });
    }
}

impl Presenter for RecordingDisplay {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.pending.clear();
        Ok(())
    }

    fn draw_text(&mut self, x: u8, y: u8, size: TextSize, text: &str) -> Result<(), DisplayError> {
        self.push(x, y, size, text, false);
        Ok(())
    }

    fn draw_highlighted_row(
        &mut self,
        x: u8,
        y: u8,
        _width: u8,
        _height: u8,
        text: &str,
    ) -> Result<(), DisplayError> {
        self.push(x + 5, y + 1, TextSize::Small, text, true);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if self.fail_next_flush {
            self.fail_next_flush = false;
            return Err(DisplayError::Communication);
        }
        self.frame = self.pending.clone();
        self.history.extend(self.frame.iter().map(|t| t.text.clone()));
        self.flushes += 1;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    Tone(u16, u32),
    Stop,
}

#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub events: Vec<AudioEvent>,
}

impl RecordingAudio {
    pub fn tones(&self) -> impl Iterator<Item = (u16, u32)> + '_ {
        self.events.iter().filter_map(|e| match *e {
            AudioEvent::Tone(f, d) => Some((f, d)),
            AudioEvent::Stop => None,
        })
    }

    pub fn last_tone(&self) -> Option<(u16, u32)> {
        self.tones().last()
    }

    pub fn played(&self, freq_hz: u16) -> bool {
        self.tones().any(|(f, _)| f == freq_hz)
    }
}

impl AudioCue for RecordingAudio {
    fn play_tone(&mut self, freq_hz: u16, duration_ms: u32) {
        self.events.push(AudioEvent::Tone(freq_hz, duration_ms));
    }

    fn stop(&mut self) {
        self.events.push(AudioEvent::Stop);
    }
}

#[derive(Debug, Default)]
pub struct RecordingLights {
    pub on: [bool; 4],
    pub switched_on: Vec<Channel>,
}

impl RecordingLights {
    pub fn is_on(&self, ch: Channel) -> bool {
        self.on[ch.index()]
    }

    pub fn all_dark(&self) -> bool {
        self.on.iter().all(|&on| !on)
    }

    pub fn lit(&self) -> Option<Channel> {
        Channel::ALL.into_iter().find(|&ch| self.is_on(ch))
    }
}

impl StimulusLights for RecordingLights {
    fn set(&mut self, channel: Channel, on: bool) {
        if on {
            self.switched_on.push(channel);
        }
        self.on[channel.index()] = on;
    }
}

/// Input port whose levels are set by the test
#[derive(Debug, Default)]
pub struct ScriptedInput {
    buttons: [bool; 4],
    confirm: bool,
    dial: u16,
}

impl ScriptedInput {
    pub fn press(&mut self, ch: Channel) {
        self.buttons[ch.index()] = true;
    }

    pub fn release(&mut self, ch: Channel) {
        self.buttons[ch.index()] = false;
    }

    pub fn set_confirm(&mut self, pressed: bool) {
        self.confirm = pressed;
    }

    pub fn set_dial(&mut self, raw: u16) {
        self.dial = raw;
    }
}

impl InputPort for ScriptedInput {
    fn digital_read(&mut self, line: InputLine) -> Level {
        let pressed = match line {
            InputLine::Button(ch) => self.buttons[ch.index()],
            InputLine::Confirm => self.confirm,
        };
        if pressed {
            Level::Pressed
        } else {
            Level::Released
        }
    }

    fn analog_read(&mut self) -> u16 {
        self.dial
    }
}

/// All fakes together
#[derive(Debug, Default)]
pub struct Rig {
    pub display: RecordingDisplay,
    pub audio: RecordingAudio,
    pub lights: RecordingLights,
    pub input: ScriptedInput,
}

impl Rig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outputs(&mut self) -> Outputs<'_> {
        self.split().0
    }

    pub fn split(&mut self) -> (Outputs<'_>, &mut ScriptedInput) {
        (
            Outputs::new(&mut self.display, &mut self.audio, &mut self.lights),
            &mut self.input,
        )
    }
}

/// Drives one session with a simulated clock
pub struct Driver {
    pub rig: Rig,
    pub ctx: AppContext,
    pub sampler: InputSampler,
    pub now: u32,
}

impl Driver {
    pub fn new() -> Self {
        Self::with_config(ConsoleConfig::default())
    }

    pub fn with_config(config: ConsoleConfig) -> Self {
        let mut rig = Rig::new();
        let mut sampler = InputSampler::new();
        sampler.sample(&mut rig.input, 0, 0);
        Self {
            rig,
            ctx: AppContext::new(config, 42),
            sampler,
            now: 1000,
        }
    }

    pub fn start<S: Session>(&mut self, session: &mut S) {
        let (mut out, _) = self.rig.split();
        session.start(&mut self.ctx, &mut out, self.now);
    }

    /// Advance one tick
    pub fn step<S: Session>(&mut self, session: &mut S) -> Poll<Outcome> {
        self.now += STEP_MS;
        let settle = session.settle_ms(&self.ctx.config);
        let (mut out, input) = self.rig.split();
        let frame = self.sampler.sample(input, self.now, settle);
        session.poll(&mut self.ctx, &mut out, &frame)
    }

    /// Advance `ms` worth of ticks, stopping early on an outcome
    pub fn run_for<S: Session>(&mut self, session: &mut S, ms: u32) -> Option<Outcome> {
        let end = self.now + ms;
        while self.now < end {
            if let Poll::Ready(outcome) = self.step(session) {
                return Some(outcome);
            }
        }
        None
    }

    /// Tick until `ready` holds; panics after `max_ms`
    pub fn run_until<S: Session>(
        &mut self,
        session: &mut S,
        max_ms: u32,
        ready: impl Fn(&S, &Rig) -> bool,
    ) {
        let end = self.now + max_ms;
        while !ready(session, &self.rig) {
            assert!(self.now < end, "condition not reached within {} ms", max_ms);
            assert!(self.step(session).is_pending(), "session ended early");
        }
    }

    /// Tick until the session ends; panics after `max_ms`
    pub fn finish<S: Session>(&mut self, session: &mut S, max_ms: u32) -> Outcome {
        match self.run_for(session, max_ms) {
            Some(outcome) => outcome,
            None => panic!("session still running after {} ms", max_ms),
        }
    }

    /// Hold a button for 40 ms, release it and let it settle
    pub fn tap<S: Session>(&mut self, session: &mut S, ch: Channel) -> Option<Outcome> {
        self.gesture(session, |input, down| {
            if down {
                input.press(ch)
            } else {
                input.release(ch)
            }
        })
    }

    fn gesture<S: Session>(
        &mut self,
        session: &mut S,
        mut set: impl FnMut(&mut ScriptedInput, bool),
    ) -> Option<Outcome> {
        set(&mut self.rig.input, true);
        if let Some(outcome) = self.run_for(session, 40) {
            return Some(outcome);
        }
        set(&mut self.rig.input, false);
        self.run_for(session, 40)
    }
}
