//! State machine definition

use super::events::ConsoleEvent;
use crate::config::TOTAL_OPTIONS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Menu entries, numbered as on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameMode {
    /// Sequence memory ("LED GAME")
    Simon = 1,
    /// Press confirm at 10.000 s
    Timing = 2,
    /// Ten-trial reaction test
    Reaction = 3,
    /// Simon, Timing and Reaction chained into one score
    Global = 4,
    /// Best results
    ScoreBoard = 5,
}

impl GameMode {
    pub const ALL: [GameMode; TOTAL_OPTIONS as usize] = [
        GameMode::Simon,
        GameMode::Timing,
        GameMode::Reaction,
        GameMode::Global,
        GameMode::ScoreBoard,
    ];

    /// Mode for a 1-based menu option
    pub fn from_option(option: u8) -> Option<Self> {
        Self::ALL.get((option as usize).checked_sub(1)?).copied()
    }

    /// 1-based menu option
    pub fn option(self) -> u8 {
        self as u8
    }

    /// Menu row text
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Simon => "1. LED GAME",
            GameMode::Timing => "2. 10 SEC TIMER",
            GameMode::Reaction => "3. REFLEX CHALLENGE",
            GameMode::Global => "4. GLOBAL COGNITIVE",
            GameMode::ScoreBoard => "5. SCORE BOARD",
        }
    }

    /// Single games get a short pause before the menu comes back
    pub fn pauses_before_menu(self) -> bool {
        matches!(self, GameMode::Simon | GameMode::Timing | GameMode::Reaction)
    }
}

/// Console states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleState {
    /// Power-on; display and generator not ready yet
    Boot,
    /// Menu visible, dial and confirm active
    Menu,
    /// One session owns all inputs and outputs
    Running(GameMode),
    /// Session over; menu returns after a pause
    Returning,
}

impl ConsoleState {
    /// Dial and confirm are only read in the menu
    pub fn in_menu(&self) -> bool {
        matches!(self, ConsoleState::Menu)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: ConsoleEvent) -> Self {
        use ConsoleEvent::*;
        use ConsoleState::*;

        match (self, event) {
            (Boot, BootComplete) => Menu,
            (Menu, Launch(mode)) => Running(mode),
            (Running(running), SessionFinished(mode)) if running == mode => {
                if mode.pauses_before_menu() {
                    Returning
                } else {
                    Menu
                }
            }
            (Returning, PauseElapsed) => Menu,

            // Default: stay in current state
            _ => self,
        }
    }
}

/// Menu selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MenuState {
    /// Highlighted option, `1..=TOTAL_OPTIONS`
    pub selected_option: u8,
    /// False while a session runs
    pub in_menu: bool,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            selected_option: 1,
            in_menu: true,
        }
    }
}

impl MenuState {
    pub fn selected_mode(&self) -> GameMode {
        GameMode::from_option(self.selected_option).unwrap_or(GameMode::Simon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_to_menu() {
        assert_eq!(
            ConsoleState::Boot.transition(ConsoleEvent::BootComplete),
            ConsoleState::Menu
        );
    }

    #[test]
    fn test_launch_every_mode() {
        for mode in GameMode::ALL {
            let next = ConsoleState::Menu.transition(ConsoleEvent::Launch(mode));
            assert_eq!(next, ConsoleState::Running(mode));
            assert!(!next.in_menu());
        }
    }

    #[test]
    fn test_single_games_pause_before_menu() {
        for mode in [GameMode::Simon, GameMode::Timing, GameMode::Reaction] {
            let returning =
                ConsoleState::Running(mode).transition(ConsoleEvent::SessionFinished(mode));
            assert_eq!(returning, ConsoleState::Returning);
            assert_eq!(
                returning.transition(ConsoleEvent::PauseElapsed),
                ConsoleState::Menu
            );
        }
    }

    #[test]
    fn test_global_and_scores_return_directly() {
        for mode in [GameMode::Global, GameMode::ScoreBoard] {
            let next = ConsoleState::Running(mode).transition(ConsoleEvent::SessionFinished(mode));
            assert_eq!(next, ConsoleState::Menu);
        }
    }

    #[test]
    fn test_launch_ignored_while_running() {
        let state = ConsoleState::Running(GameMode::Timing);
        assert_eq!(state.transition(ConsoleEvent::Launch(GameMode::Simon)), state);
        assert_eq!(
            state.transition(ConsoleEvent::SessionFinished(GameMode::Simon)),
            state
        );
    }

    #[test]
    fn test_mode_from_option() {
        assert_eq!(GameMode::from_option(0), None);
        assert_eq!(GameMode::from_option(1), Some(GameMode::Simon));
        assert_eq!(GameMode::from_option(5), Some(GameMode::ScoreBoard));
        assert_eq!(GameMode::from_option(6), None);
        for mode in GameMode::ALL {
            assert_eq!(GameMode::from_option(mode.option()), Some(mode));
        }
    }
}
