//! Button debouncing

use crate::traits::Level;

/// Press-and-release detector with a settle delay
///
/// A press is reported once the line is released again and at least
/// `settle_ms` have passed since the press was first seen. A detector
/// starts disarmed and ignores a line that is already held until it has
/// been seen released once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeDetector {
    armed: bool,
    pressed_at: Option<u32>,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self {
            armed: false,
            pressed_at: None,
        }
    }

    /// Feed one sample; returns `true` when an edge is accepted
    pub fn update(&mut self, level: Level, now_ms: u32, settle_ms: u32) -> bool {
        match (level, self.pressed_at) {
            (Level::Released, None) => {
                self.armed = true;
                false
            }
            (Level::Pressed, None) => {
                if self.armed {
                    self.pressed_at = Some(now_ms);
                }
                false
            }
            (Level::Pressed, Some(_)) => false,
            (Level::Released, Some(at)) => {
                if now_ms.wrapping_sub(at) >= settle_ms {
                    self.pressed_at = None;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// A press has been seen and not yet accepted
    pub fn is_held(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// Forget any pending press and wait for a release
    pub fn disarm(&mut self) {
        self.armed = false;
        self.pressed_at = None;
    }
}

/// Level-triggered confirm with a re-trigger window
///
/// A held button fires again once the window has passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfirmTrigger {
    last_accepted_ms: u32,
}

impl ConfirmTrigger {
    pub const fn new() -> Self {
        Self { last_accepted_ms: 0 }
    }

    pub fn update(&mut self, level: Level, now_ms: u32, window_ms: u32) -> bool {
        if level.is_pressed() && now_ms.wrapping_sub(self.last_accepted_ms) > window_ms {
            self.last_accepted_ms = now_ms;
            true
        } else {
            false
        }
    }
}
