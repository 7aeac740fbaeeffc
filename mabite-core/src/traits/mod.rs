//! Collaborator traits
//!
//! These traits define the interface between the game logic and the
//! board-specific display, speaker, lights and input hardware.

pub mod audio;
pub mod channel;
pub mod clock;
pub mod display;
pub mod input;
pub mod lights;

pub use audio::AudioCue;
pub use channel::Channel;
pub use clock::Clock;
pub use display::{DisplayError, Presenter, PresenterExt, TextSize};
pub use input::{InputLine, InputPort, Level};
pub use lights::StimulusLights;
