//! Raw input port trait

use super::channel::Channel;

/// Logical input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputLine {
    /// One of the four stimulus buttons
    Button(Channel),
    /// The menu confirm button
    Confirm,
}

/// Debounce-free reading of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Pressed,
    Released,
}

impl Level {
    pub fn is_pressed(self) -> bool {
        self == Level::Pressed
    }
}

/// Trait for sampling raw inputs
///
/// Implementations hide electrical polarity (the board's buttons are
/// active-low with pull-ups).
pub trait InputPort {
    /// Sample a digital line
    fn digital_read(&mut self, line: InputLine) -> Level;

    /// Sample the menu dial (0..=4095)
    fn analog_read(&mut self) -> u16;
}
