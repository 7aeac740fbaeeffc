//! Dial to menu option mapping

use crate::config::{DIAL_MAX, TOTAL_OPTIONS};

/// Map a raw dial reading onto `1..=TOTAL_OPTIONS`
pub fn option_for_dial(raw: u16) -> u8 {
    let raw = raw.min(DIAL_MAX) as u32;
    let option = 1 + raw * (TOTAL_OPTIONS as u32 - 1) / DIAL_MAX as u32;
    option.clamp(1, TOTAL_OPTIONS as u32) as u8
}

/// Decides when a dial movement should redraw the menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialTracker {
    last_raw: u16,
}

impl DialTracker {
    pub const fn new() -> Self {
        Self { last_raw: 0 }
    }

    /// Returns the option to apply when the menu should redraw
    ///
    /// That is when the mapped option differs from `current` or the raw
    /// reading moved more than `noise_threshold` since the last redraw.
    pub fn update(&mut self, raw: u16, current: u8, noise_threshold: u16) -> Option<u8> {
        let option = option_for_dial(raw);
        if option != current || raw.abs_diff(self.last_raw) > noise_threshold {
            self.last_raw = raw;
            Some(option)
        } else {
            None
        }
    }

    pub fn last_raw(&self) -> u16 {
        self.last_raw
    }
}
