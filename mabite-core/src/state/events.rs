//! Events that trigger console state transitions

use super::machine::GameMode;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleEvent {
    /// Hardware is up and the generator is seeded
    BootComplete,
    /// Confirm accepted in the menu
    Launch(GameMode),
    /// The running session produced its result
    SessionFinished(GameMode),
    /// The post-session pause elapsed
    PauseElapsed,
}

impl ConsoleEvent {
    /// Check if this event comes from the player
    pub fn is_user_event(&self) -> bool {
        matches!(self, ConsoleEvent::Launch(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_events() {
        assert!(ConsoleEvent::Launch(GameMode::Simon).is_user_event());
        assert!(!ConsoleEvent::SessionFinished(GameMode::Simon).is_user_event());
        assert!(!ConsoleEvent::PauseElapsed.is_user_event());
    }
}
