//! Menu dial on ADC0 (GPIO26)

use embassy_rp::adc::{self, Adc, Blocking};
use embassy_rp::gpio::Pull;
use embassy_rp::peripherals::{ADC, PIN_26};
use embassy_rp::Peri;

use mabite_hal::{AnalogError, AnalogInput};

/// Potentiometer on ADC0, sampled with blocking conversions
///
/// A single conversion takes 2 us, well inside one console tick.
pub struct DialAdc {
    adc: Adc<'static, Blocking>,
    channel: adc::Channel<'static>,
}

impl DialAdc {
    pub fn new(adc: Peri<'static, ADC>, pin: Peri<'static, PIN_26>) -> Self {
        Self {
            adc: Adc::new_blocking(adc, adc::Config::default()),
            channel: adc::Channel::new_pin(pin, Pull::None),
        }
    }
}

impl AnalogInput for DialAdc {
    fn read_raw(&mut self) -> Result<u16, AnalogError> {
        self.adc
            .blocking_read(&mut self.channel)
            .map_err(|_| AnalogError::Conversion)
    }
}
