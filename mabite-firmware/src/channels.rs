//! Inter-task communication
//!
//! The console task composes frames; the display task owns the I2C bus.
//! They meet at a shared frame buffer guarded by a blocking mutex, which
//! keeps the console tick synchronous.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;

use mabite_display::FrameBuffer;

/// Most recent finished frame
pub static FRAME: Mutex<CriticalSectionRawMutex, RefCell<FrameBuffer>> =
    Mutex::new(RefCell::new(FrameBuffer::new()));

/// Signal that `FRAME` holds a frame not yet sent to the panel
pub static FRAME_READY: Signal<CriticalSectionRawMutex, ()> = Signal::new();
