//! Board pin map
//!
//! | Function            | GPIO          |
//! |---------------------|---------------|
//! | Buttons 0-3         | 0, 1, 2, 3    |
//! | LEDs 0-3            | 8, 7, 6, 5    |
//! | Confirm button      | 9             |
//! | Piezo (PWM5 A)      | 10            |
//! | OLED SDA / SCL      | 18 / 19 (I2C1)|
//! | Dial (ADC0)         | 26            |

use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals::{ADC, I2C1, PIN_10, PIN_18, PIN_19, PIN_26, PWM_SLICE5};
use embassy_rp::{Peri, Peripherals};

pub const BUTTON_PINS: [u8; 4] = [0, 1, 2, 3];
pub const LED_PINS: [u8; 4] = [8, 7, 6, 5];
pub const CONFIRM_PIN: u8 = 9;
pub const SPEAKER_PIN: u8 = 10;
pub const OLED_SDA_PIN: u8 = 18;
pub const OLED_SCL_PIN: u8 = 19;
pub const DIAL_PIN: u8 = 26;

/// 7-bit I2C address of the SSD1306 module
pub const OLED_ADDR: u8 = 0x3C;

/// Number of GPIO pins on RP2040
pub const GPIO_COUNT: u8 = 30;

/// Error in the pin map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin assigned to two functions
    AlreadyTaken(u8),
}

/// All GPIO numbers the console claims
pub fn assigned_pins() -> impl Iterator<Item = u8> {
    BUTTON_PINS
        .into_iter()
        .chain(LED_PINS)
        .chain([CONFIRM_PIN, SPEAKER_PIN, OLED_SDA_PIN, OLED_SCL_PIN, DIAL_PIN])
}

/// Check that every pin exists and is used once
pub fn check_pin_map<I: IntoIterator<Item = u8>>(pins: I) -> Result<(), PinError> {
    let mut taken: u32 = 0;
    for pin in pins {
        if pin >= GPIO_COUNT {
            return Err(PinError::InvalidPin(pin));
        }
        let bit = 1u32 << pin;
        if taken & bit != 0 {
            return Err(PinError::AlreadyTaken(pin));
        }
        taken |= bit;
    }
    Ok(())
}

/// PWM slice and channel (`true` for A) driving a GPIO
pub fn pwm_output(gpio: u8) -> (u8, bool) {
    ((gpio / 2) % 8, gpio % 2 == 0)
}

/// Peripherals claimed by the console, split out of [`Peripherals`]
pub struct ConsolePins {
    pub buttons: [Peri<'static, AnyPin>; 4],
    pub leds: [Peri<'static, AnyPin>; 4],
    pub confirm: Peri<'static, AnyPin>,
    pub speaker: Peri<'static, PIN_10>,
    pub speaker_slice: Peri<'static, PWM_SLICE5>,
    pub dial: Peri<'static, PIN_26>,
    pub adc: Peri<'static, ADC>,
    pub oled_i2c: Peri<'static, I2C1>,
    pub oled_sda: Peri<'static, PIN_18>,
    pub oled_scl: Peri<'static, PIN_19>,
}

impl ConsolePins {
    /// Take the console's pins according to the map above
    pub fn take(p: Peripherals) -> Self {
        Self {
            buttons: [p.PIN_0.into(), p.PIN_1.into(), p.PIN_2.into(), p.PIN_3.into()],
            leds: [p.PIN_8.into(), p.PIN_7.into(), p.PIN_6.into(), p.PIN_5.into()],
            confirm: p.PIN_9.into(),
            speaker: p.PIN_10,
            speaker_slice: p.PWM_SLICE5,
            dial: p.PIN_26,
            adc: p.ADC,
            oled_i2c: p.I2C1,
            oled_sda: p.PIN_18,
            oled_scl: p.PIN_19,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_map_is_consistent() {
        assert_eq!(check_pin_map(assigned_pins()), Ok(()));
        assert_eq!(assigned_pins().count(), 13);
    }

    #[test]
    fn test_conflicts_are_reported() {
        assert_eq!(check_pin_map([4, 5, 4]), Err(PinError::AlreadyTaken(4)));
        assert_eq!(check_pin_map([30]), Err(PinError::InvalidPin(30)));
    }

    #[test]
    fn test_peripheral_routing() {
        assert_eq!(pwm_output(SPEAKER_PIN), (5, true));
        // ADC0 is the first analog-capable pin
        assert_eq!(DIAL_PIN, 26);
        // I2C1 SDA/SCL live on GPIO 18/19 in function 3
        assert_eq!(OLED_SDA_PIN % 4, 2);
        assert_eq!(OLED_SCL_PIN % 4, 3);
    }
}
