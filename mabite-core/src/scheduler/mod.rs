//! Timers and cue playback
//!
//! Every wait in the console is a [`Timer`] checked from the tick loop;
//! melodies and light flashes are stepped by [`MelodyPlayer`] and
//! [`Flasher`] instead of sleeping between notes.

pub mod cue;
pub mod timer;

pub use cue::{Flasher, MelodyPlayer, Note, Tune};
pub use timer::{Stopwatch, Timer};
