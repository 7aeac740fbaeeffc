//! Console tick
//!
//! Drives the game core at a fixed rate. The timestamp travels with the
//! signal so every part of one tick sees the same time.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Ticker};

use mabite_hal::Clock;

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 5;

/// Signal to notify the console of a tick
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Milliseconds since boot from the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));
    let clock = EmbassyClock;

    loop {
        ticker.next().await;
        TICK_SIGNAL.signal(clock.now_ms());
    }
}
