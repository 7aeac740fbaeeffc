//! RP2040-specific HAL for the MABITE console
//!
//! This crate provides RP2040 implementations of the `mabite-hal` traits:
//! - Board pin map
//! - GPIO wrappers for buttons and LEDs
//! - ADC channel for the menu dial
//! - PWM tone generator for the piezo

#![no_std]

pub mod adc;
pub mod gpio;
pub mod pins;
pub mod pwm;

pub use adc::DialAdc;
pub use gpio::{RpInput, RpOutput};
pub use pins::ConsolePins;
pub use pwm::PwmTone;
