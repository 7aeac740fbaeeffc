//! Stimulus channel identifier

use crate::config::{CHANNEL_COUNT, CHANNEL_TONES};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four illuminated buttons
///
/// Each channel pairs a button, the light behind it and a tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Channel(u8);

impl Channel {
    /// All channels in scan order
    pub const ALL: [Channel; CHANNEL_COUNT] = [Channel(0), Channel(1), Channel(2), Channel(3)];

    /// Create a channel from its index (0-3)
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < CHANNEL_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Channel index (0-3)
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Tone frequency paired with this channel
    pub const fn tone_hz(self) -> u16 {
        CHANNEL_TONES[self.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_range() {
        assert!(Channel::new(0).is_some());
        assert!(Channel::new(3).is_some());
        assert!(Channel::new(4).is_none());
    }

    #[test]
    fn test_scan_order() {
        for (i, ch) in Channel::ALL.iter().enumerate() {
            assert_eq!(ch.index(), i);
        }
    }

    #[test]
    fn test_tones_rise_with_index() {
        assert!(Channel::ALL.windows(2).all(|w| w[0].tone_hz() < w[1].tone_hz()));
    }
}
