//! GPIO wrappers implementing the `mabite-hal` pin traits

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;

use mabite_hal::{InputPin, OutputPin};

/// Button input with the internal pull-up enabled
pub struct RpInput(Input<'static>);

impl RpInput {
    pub fn pull_up(pin: Peri<'static, AnyPin>) -> Self {
        Self(Input::new(pin, Pull::Up))
    }
}

impl InputPin for RpInput {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Push-pull output, starts low
pub struct RpOutput(Output<'static>);

impl RpOutput {
    pub fn new(pin: Peri<'static, AnyPin>) -> Self {
        Self(Output::new(pin, Level::Low))
    }
}

impl OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}
