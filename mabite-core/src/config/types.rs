//! Configuration type definitions
//!
//! Timing constants for the menu and every game. The defaults reproduce
//! the feel of the shipped console; tests shorten some of them.

use super::pitches::{NOTE_C4, NOTE_E4, NOTE_G3, NOTE_G5};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of moves a Simon sequence can hold
pub const MAX_SEQUENCE_LEN: usize = 100;

/// Number of stimulus channels (illuminated buttons)
pub const CHANNEL_COUNT: usize = 4;

/// Number of entries in the main menu
pub const TOTAL_OPTIONS: u8 = 5;

/// Number of recorded trials in one reaction session
pub const REACTION_TRIALS: usize = 10;

/// Full-scale reading of the 12-bit dial ADC
pub const DIAL_MAX: u16 = 4095;

/// Tone played with each stimulus channel
pub const CHANNEL_TONES: [u16; CHANNEL_COUNT] = [NOTE_G3, NOTE_C4, NOTE_E4, NOTE_G5];

/// Menu configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MenuConfig {
    /// Raw dial movement that forces a redraw even without an option change
    pub dial_noise_threshold: u16,
    /// Confirm re-trigger window (ms)
    pub confirm_debounce_ms: u32,
    /// Pause after a single-game session before the menu returns (ms)
    pub return_pause_ms: u32,
    /// How long the score board stays up (ms)
    pub scoreboard_hold_ms: u32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            dial_noise_threshold: 200,
            confirm_debounce_ms: 50,
            return_pause_ms: 1000,
            scoreboard_hold_ms: 5000,
        }
    }
}

/// Sequence memory game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimonConfig {
    /// Title screen duration (ms)
    pub intro_ms: u32,
    /// Light + tone on time per move (ms)
    pub cue_on_ms: u32,
    /// Dark gap after each move (ms)
    pub cue_gap_ms: u32,
    /// Button settle delay before a release is accepted (ms)
    pub settle_ms: u32,
    /// Pause after the level-up melody (ms)
    pub level_up_pause_ms: u32,
    /// Game over screen hold after the melody (ms)
    pub game_over_hold_ms: u32,
}

impl Default for SimonConfig {
    fn default() -> Self {
        Self {
            intro_ms: 1500,
            cue_on_ms: 300,
            cue_gap_ms: 50,
            settle_ms: 50,
            level_up_pause_ms: 500,
            game_over_hold_ms: 2000,
        }
    }
}

/// Precision timing game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// "READY ?" screen duration (ms)
    pub intro_ms: u32,
    /// Target press time (ms)
    pub target_ms: u32,
    /// Attempt is abandoned after this long (ms)
    pub timeout_ms: u32,
    /// Deviations strictly below this are a win (ms)
    pub win_threshold_ms: u32,
    /// The running counter is only shown during this window (ms)
    pub live_display_ms: u32,
    /// Minimum interval between counter redraws (ms)
    pub live_refresh_ms: u32,
    /// Result screen hold after the melody (ms)
    pub result_hold_ms: u32,
    /// Confirm button settle delay (ms)
    pub settle_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            intro_ms: 1500,
            target_ms: 10_000,
            timeout_ms: 12_000,
            win_threshold_ms: 100,
            live_display_ms: 5000,
            live_refresh_ms: 50,
            result_hold_ms: 3000,
            settle_ms: 50,
        }
    }
}

/// Reaction time game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReactionConfig {
    /// Title screen duration (ms)
    pub intro_ms: u32,
    /// Stimulus tone length (ms); the light stays on until a press
    pub stimulus_tone_ms: u32,
    /// Button settle delay (ms)
    pub settle_ms: u32,
    /// Pause after every accepted press, right or wrong (ms)
    pub trial_pause_ms: u32,
    /// "10th Try" screen duration (ms)
    pub last_trial_hold_ms: u32,
    /// Mean screen hold after the melody (ms)
    pub result_hold_ms: u32,
    /// Re-fire a fresh stimulus after a wrong press
    ///
    /// Off by default: a wrong press leaves the trial armed with the
    /// stimulus dark and the stopwatch running.
    pub rearm_after_miss: bool,
}

impl Default for ReactionConfig {
    fn default() -> Self {
        Self {
            intro_ms: 2000,
            stimulus_tone_ms: 100,
            settle_ms: 30,
            trial_pause_ms: 1000,
            last_trial_hold_ms: 1500,
            result_hold_ms: 3000,
            rearm_after_miss: false,
        }
    }
}

/// Global challenge configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GlobalConfig {
    /// Title screen duration (ms)
    pub intro_ms: u32,
    /// Pause between sub-games (ms)
    pub between_games_ms: u32,
    /// Result screen hold after the fanfare (ms)
    pub result_hold_ms: u32,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            intro_ms: 2000,
            between_games_ms: 1000,
            result_hold_ms: 5000,
        }
    }
}

/// Complete console configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConsoleConfig {
    pub menu: MenuConfig,
    pub simon: SimonConfig,
    pub timing: TimingConfig,
    pub reaction: ReactionConfig,
    pub global: GlobalConfig,
}
