//! Board adapters
//!
//! Wrap raw pins into the collaborators the game core expects:
//!
//! - [`ButtonPanel`]: four stimulus buttons, confirm button and the menu
//!   dial as an [`InputPort`]
//! - [`LightBar`]: the four button LEDs as [`StimulusLights`]
//! - [`Speaker`]: the piezo as a fire-and-forget [`AudioCue`]

#[cfg(feature = "defmt")]
use defmt::warn;

use mabite_core::config::CHANNEL_COUNT;
use mabite_core::traits::{AudioCue, Channel, Clock, InputLine, InputPort, Level, StimulusLights};

use crate::analog::{AnalogInput, ADC_MAX};
use crate::gpio::{InputPin, OutputPin};
use crate::tone::ToneOutput;

/// Buttons and dial
///
/// Buttons are wired to ground with pull-ups, so a low pin is a press.
pub struct ButtonPanel<B, C, A> {
    buttons: [B; CHANNEL_COUNT],
    confirm: C,
    dial: A,
    last_dial: u16,
}

impl<B, C, A> ButtonPanel<B, C, A>
where
    B: InputPin,
    C: InputPin,
    A: AnalogInput,
{
    /// `buttons` is indexed by channel
    pub fn new(buttons: [B; CHANNEL_COUNT], confirm: C, dial: A) -> Self {
        Self {
            buttons,
            confirm,
            dial,
            last_dial: 0,
        }
    }

    /// Borrow the dial, e.g. to gather seed noise at boot
    pub fn dial_mut(&mut self) -> &mut A {
        &mut self.dial
    }
}

fn level_of<P: InputPin>(pin: &P) -> Level {
    if pin.is_low() {
        Level::Pressed
    } else {
        Level::Released
    }
}

impl<B, C, A> InputPort for ButtonPanel<B, C, A>
where
    B: InputPin,
    C: InputPin,
    A: AnalogInput,
{
    fn digital_read(&mut self, line: InputLine) -> Level {
        match line {
            InputLine::Button(ch) => level_of(&self.buttons[ch.index()]),
            InputLine::Confirm => level_of(&self.confirm),
        }
    }

    /// A failed conversion repeats the previous reading
    fn analog_read(&mut self) -> u16 {
        match self.dial.read_raw() {
            Ok(raw) => {
                self.last_dial = raw.min(ADC_MAX);
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                warn!("Dial read failed: {}", _e);
            }
        }
        self.last_dial
    }
}

/// The four button LEDs, active high
pub struct LightBar<P> {
    leds: [P; CHANNEL_COUNT],
}

impl<P: OutputPin> LightBar<P> {
    /// `leds` is indexed by channel; all start dark
    pub fn new(mut leds: [P; CHANNEL_COUNT]) -> Self {
        for led in leds.iter_mut() {
            led.set_low();
        }
        Self { leds }
    }

    pub fn is_lit(&self, channel: Channel) -> bool {
        self.leds[channel.index()].is_set_high()
    }
}

impl<P: OutputPin> StimulusLights for LightBar<P> {
    fn set(&mut self, channel: Channel, on: bool) {
        self.leds[channel.index()].set_state(on);
    }
}

/// Piezo speaker with self-timed tones
///
/// [`Speaker::service`] must be called from the tick loop; it silences a
/// tone once its duration has run out.
pub struct Speaker<T, K> {
    output: T,
    clock: K,
    /// Deadline of the sounding tone, `None` when silent or untimed
    ends_at: Option<u32>,
    sounding: bool,
}

impl<T: ToneOutput, K: Clock> Speaker<T, K> {
    pub fn new(mut output: T, clock: K) -> Self {
        output.silence();
        Self {
            output,
            clock,
            ends_at: None,
            sounding: false,
        }
    }

    pub fn is_sounding(&self) -> bool {
        self.sounding
    }

    /// Silence an expired tone
    pub fn service(&mut self) {
        let Some(end) = self.ends_at else {
            return;
        };
        // Deadline reached once `now - end` lands in the lower half of the ring
        if self.clock.now_ms().wrapping_sub(end) < u32::MAX / 2 {
            self.stop();
        }
    }
}

impl<T: ToneOutput, K: Clock> AudioCue for Speaker<T, K> {
    fn play_tone(&mut self, freq_hz: u16, duration_ms: u32) {
        if freq_hz == 0 {
            self.stop();
            return;
        }
        self.output.set_frequency(freq_hz);
        self.sounding = true;
        self.ends_at = (duration_ms > 0).then(|| self.clock.now_ms().wrapping_add(duration_ms));
    }

    fn stop(&mut self) {
        self.output.silence();
        self.sounding = false;
        self.ends_at = None;
    }
}
