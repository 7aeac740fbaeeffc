//! Per-tick input sampling

use crate::config::CHANNEL_COUNT;
use crate::traits::{Channel, InputLine, InputPort, Level};

use super::debounce::EdgeDetector;

/// Everything a session needs to know about the inputs for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputFrame {
    /// Sample time
    pub now_ms: u32,
    /// Stimulus button accepted this tick
    pub button: Option<Channel>,
    /// Confirm press-and-release accepted this tick
    pub confirm_edge: bool,
    /// Raw confirm level
    pub confirm_level: Level,
    /// Raw dial reading
    pub dial: u16,
}

impl InputFrame {
    /// A frame with no input activity
    pub const fn idle(now_ms: u32) -> Self {
        Self {
            now_ms,
            button: None,
            confirm_edge: false,
            confirm_level: Level::Released,
            dial: 0,
        }
    }
}

/// Turns raw port readings into [`InputFrame`]s
///
/// Buttons are scanned in channel order. While one button is held the
/// others are not looked at, so a single gesture yields a single edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSampler {
    buttons: [EdgeDetector; CHANNEL_COUNT],
    confirm: EdgeDetector,
}

impl InputSampler {
    pub const fn new() -> Self {
        Self {
            buttons: [EdgeDetector::new(); CHANNEL_COUNT],
            confirm: EdgeDetector::new(),
        }
    }

    /// Sample every input line once
    pub fn sample(&mut self, port: &mut dyn InputPort, now_ms: u32, settle_ms: u32) -> InputFrame {
        let confirm_level = port.digital_read(InputLine::Confirm);
        let confirm_edge = self.confirm.update(confirm_level, now_ms, settle_ms);
        let dial = port.analog_read();

        InputFrame {
            now_ms,
            button: self.scan_buttons(port, now_ms, settle_ms),
            confirm_edge,
            confirm_level,
            dial,
        }
    }

    fn scan_buttons(&mut self, port: &mut dyn InputPort, now_ms: u32, settle_ms: u32) -> Option<Channel> {
        if let Some(i) = self.buttons.iter().position(|d| d.is_held()) {
            let ch = Channel::ALL[i];
            let level = port.digital_read(InputLine::Button(ch));
            return self.buttons[i].update(level, now_ms, settle_ms).then_some(ch);
        }

        for ch in Channel::ALL {
            let level = port.digital_read(InputLine::Button(ch));
            let detector = &mut self.buttons[ch.index()];
            detector.update(level, now_ms, settle_ms);
            if detector.is_held() {
                break;
            }
        }
        None
    }

    /// Drop pending presses; lines currently held are ignored until released
    pub fn rearm(&mut self) {
        for d in &mut self.buttons {
            d.disarm();
        }
        self.confirm.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedInput;

    fn settled(port: &mut ScriptedInput) -> InputSampler {
        let mut s = InputSampler::new();
        s.sample(port, 0, 50);
        s
    }

    #[test]
    fn test_button_edge() {
        let mut port = ScriptedInput::default();
        let mut s = settled(&mut port);

        port.press(Channel::ALL[1]);
        assert_eq!(s.sample(&mut port, 10, 50).button, None);
        port.release(Channel::ALL[1]);
        assert_eq!(s.sample(&mut port, 40, 50).button, None);
        assert_eq!(s.sample(&mut port, 60, 50).button, Some(Channel::ALL[1]));
        assert_eq!(s.sample(&mut port, 70, 50).button, None);
    }

    #[test]
    fn test_one_button_at_a_time() {
        let mut port = ScriptedInput::default();
        let mut s = settled(&mut port);

        port.press(Channel::ALL[2]);
        s.sample(&mut port, 10, 50);
        port.press(Channel::ALL[0]);
        s.sample(&mut port, 20, 50);
        port.release(Channel::ALL[2]);
        assert_eq!(s.sample(&mut port, 100, 50).button, Some(Channel::ALL[2]));

        // Channel 0 was pressed while 2 was held; it is picked up now
        s.sample(&mut port, 110, 50);
        port.release(Channel::ALL[0]);
        assert_eq!(s.sample(&mut port, 200, 50).button, Some(Channel::ALL[0]));
    }

    #[test]
    fn test_confirm_edge_and_level() {
        let mut port = ScriptedInput::default();
        let mut s = settled(&mut port);

        port.set_confirm(true);
        let f = s.sample(&mut port, 10, 50);
        assert_eq!(f.confirm_level, Level::Pressed);
        assert!(!f.confirm_edge);
        port.set_confirm(false);
        assert!(s.sample(&mut port, 80, 50).confirm_edge);
    }

    #[test]
    fn test_rearm_ignores_held_confirm() {
        let mut port = ScriptedInput::default();
        let mut s = settled(&mut port);

        port.set_confirm(true);
        s.rearm();
        s.sample(&mut port, 10, 50);
        port.set_confirm(false);
        assert!(!s.sample(&mut port, 100, 50).confirm_edge);

        port.set_confirm(true);
        s.sample(&mut port, 200, 50);
        port.set_confirm(false);
        assert!(s.sample(&mut port, 300, 50).confirm_edge);
    }

    #[test]
    fn test_dial_passthrough() {
        let mut port = ScriptedInput::default();
        port.set_dial(3000);
        let mut s = InputSampler::new();
        assert_eq!(s.sample(&mut port, 0, 50).dial, 3000);
    }
}
