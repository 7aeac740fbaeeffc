//! Application context and output bundle
//!
//! Everything that outlives a single session lives in [`AppContext`];
//! the collaborators a session drives are lent to it as [`Outputs`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "defmt")]
use defmt::warn;

use crate::config::{ConsoleConfig, CHANNEL_COUNT};
use crate::score::ScoreBoard;
use crate::state::MenuState;
use crate::traits::{AudioCue, Channel, DisplayError, Presenter, StimulusLights};

/// Long-lived console state
pub struct AppContext {
    pub config: ConsoleConfig,
    pub scores: ScoreBoard,
    pub menu: MenuState,
    rng: SmallRng,
}

impl AppContext {
    /// Create a context with an empty score board
    ///
    /// `seed` should come from a noisy source (the floating dial input);
    /// the generator is seeded once per power-up.
    pub fn new(config: ConsoleConfig, seed: u64) -> Self {
        Self {
            config,
            scores: ScoreBoard::new(),
            menu: MenuState::default(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Uniformly random stimulus channel
    pub fn random_channel(&mut self) -> Channel {
        let index = self.rng.random_range(0..CHANNEL_COUNT as u8);
        Channel::ALL[index as usize]
    }
}

/// Mutable borrows of the output collaborators for one tick
pub struct Outputs<'a> {
    pub display: &'a mut dyn Presenter,
    pub audio: &'a mut dyn AudioCue,
    pub lights: &'a mut dyn StimulusLights,
}

impl<'a> Outputs<'a> {
    pub fn new(
        display: &'a mut dyn Presenter,
        audio: &'a mut dyn AudioCue,
        lights: &'a mut dyn StimulusLights,
    ) -> Self {
        Self {
            display,
            audio,
            lights,
        }
    }

    /// Run a drawing routine; a failed frame is dropped
    ///
    /// The next screen change redraws from scratch, so there is nothing
    /// to retry.
    pub fn render<F>(&mut self, draw: F)
    where
        F: FnOnce(&mut dyn Presenter) -> Result<(), DisplayError>,
    {
        if let Err(_e) = draw(&mut *self.display) {
            #[cfg(feature = "defmt")]
            warn!("Frame dropped: {}", _e);
        }
    }

    /// Silence the speaker and switch every light off
    pub fn quiet(&mut self) {
        self.audio.stop();
        self.lights.all_off();
    }
}
