//! MABITE Hardware Abstraction Layer
//!
//! This crate defines the pin-level traits a chip HAL implements, and the
//! board adapters that turn those pins into the collaborators the game
//! core talks to.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  mabite-core (menu, games, scores)      │
//! └─────────────────────────────────────────┘
//!                     │  InputPort / StimulusLights / AudioCue
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  mabite-hal (this crate - panel)        │
//! └─────────────────────────────────────────┘
//!                     │  InputPin / OutputPin / AnalogInput / ToneOutput
//!                     ▼
//!             ┌───────────────┐
//!             │ mabite-hal-   │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`analog::AnalogInput`] - ADC channel
//! - [`tone::ToneOutput`] - Square-wave generator for the piezo

#![no_std]
#![deny(unsafe_code)]

pub mod analog;
pub mod gpio;
pub mod panel;
pub mod tone;

pub use analog::{AnalogError, AnalogInput};
pub use gpio::{InputPin, OutputPin};
pub use panel::{ButtonPanel, LightBar, Speaker};
pub use tone::{ToneOutput, ToneTiming};

pub use mabite_core::traits::Clock;
