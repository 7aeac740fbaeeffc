//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod console;
pub mod display;
pub mod tick;

pub use console::{console_task, ConsoleIo};
pub use display::display_task;
pub use tick::tick_task;
