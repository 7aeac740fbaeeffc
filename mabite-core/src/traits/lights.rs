//! Stimulus light trait

use super::channel::Channel;

/// Trait for the four lights behind the buttons
pub trait StimulusLights {
    /// Switch one light on or off
    fn set(&mut self, channel: Channel, on: bool);

    /// Switch every light off
    fn all_off(&mut self) {
        for ch in Channel::ALL {
            self.set(ch, false);
        }
    }
}
