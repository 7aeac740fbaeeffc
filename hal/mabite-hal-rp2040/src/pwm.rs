//! PWM tone generator for the piezo
//!
//! The speaker sits on GPIO10, channel A of PWM slice 5. Pitch is set
//! through the slice's 8.4 fixed-point divider and wrap value; the
//! compare value is kept at half the period for a square wave.

#[cfg(feature = "defmt")]
use defmt::warn;
use embassy_rp::peripherals::{PIN_10, PWM_SLICE5};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::Peri;
use fixed::types::extra::U4;
use fixed::FixedU16;

use mabite_hal::tone::{tone_timing, ToneOutput};

/// Piezo driver on one PWM channel
pub struct PwmTone {
    pwm: Pwm<'static>,
    config: PwmConfig,
    sys_hz: u32,
}

impl PwmTone {
    pub fn new(slice: Peri<'static, PWM_SLICE5>, pin: Peri<'static, PIN_10>) -> Self {
        let mut config = PwmConfig::default();
        config.compare_a = 0;
        let pwm = Pwm::new_output_a(slice, pin, config.clone());
        Self {
            pwm,
            config,
            sys_hz: embassy_rp::clocks::clk_sys_freq(),
        }
    }
}

impl ToneOutput for PwmTone {
    fn set_frequency(&mut self, freq_hz: u16) {
        let Some(timing) = tone_timing(self.sys_hz, freq_hz) else {
            #[cfg(feature = "defmt")]
            warn!("Tone {} Hz out of range", freq_hz);
            self.silence();
            return;
        };
        self.config.divider = FixedU16::<U4>::from_bits(timing.divider_16ths);
        self.config.top = timing.top;
        self.config.compare_a = timing.compare;
        self.config.enable = true;
        self.pwm.set_config(&self.config);
    }

    fn silence(&mut self) {
        self.config.compare_a = 0;
        self.pwm.set_config(&self.config);
    }
}
