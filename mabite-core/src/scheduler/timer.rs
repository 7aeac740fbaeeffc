//! Millisecond timers
//!
//! All arithmetic is wrapping so a timer started just before the clock
//! rolls over still expires on time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One-shot countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timer {
    start_ms: u32,
    duration_ms: u32,
}

impl Timer {
    /// Start a timer that expires `duration_ms` after `now_ms`
    pub const fn after(now_ms: u32, duration_ms: u32) -> Self {
        Self {
            start_ms: now_ms,
            duration_ms,
        }
    }

    /// A timer that is already expired
    pub const fn expired(now_ms: u32) -> Self {
        Self::after(now_ms, 0)
    }

    pub fn elapsed_ms(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.start_ms)
    }

    pub fn is_expired(&self, now_ms: u32) -> bool {
        self.elapsed_ms(now_ms) >= self.duration_ms
    }

    /// Time left before expiry (0 once expired)
    pub fn remaining_ms(&self, now_ms: u32) -> u32 {
        self.duration_ms.saturating_sub(self.elapsed_ms(now_ms))
    }

    /// Absolute expiry time
    pub fn deadline_ms(&self) -> u32 {
        self.start_ms.wrapping_add(self.duration_ms)
    }

    /// Chain a new timer from this one's deadline
    ///
    /// Late polling does not accumulate drift across a chain of steps.
    pub fn chain(&self, duration_ms: u32) -> Self {
        Self::after(self.deadline_ms(), duration_ms)
    }
}

/// Free-running elapsed time measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stopwatch {
    start_ms: u32,
}

impl Stopwatch {
    pub const fn start(now_ms: u32) -> Self {
        Self { start_ms: now_ms }
    }

    pub fn started_at(&self) -> u32 {
        self.start_ms
    }

    pub fn elapsed_ms(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.start_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_expiry() {
        let t = Timer::after(1000, 500);
        assert!(!t.is_expired(1000));
        assert!(!t.is_expired(1499));
        assert!(t.is_expired(1500));
        assert_eq!(t.remaining_ms(1200), 300);
        assert_eq!(t.remaining_ms(2000), 0);
        assert_eq!(t.deadline_ms(), 1500);
    }

    #[test]
    fn test_zero_duration_is_expired() {
        assert!(Timer::expired(42).is_expired(42));
    }

    #[test]
    fn test_timer_wraps() {
        let t = Timer::after(u32::MAX - 100, 300);
        assert!(!t.is_expired(u32::MAX));
        assert!(!t.is_expired(150));
        assert!(t.is_expired(199));
        assert_eq!(t.elapsed_ms(50), 151);
    }

    #[test]
    fn test_chain_has_no_drift() {
        let first = Timer::after(0, 300);
        // Polled late at 320 ms; the next step still ends at 350 ms
        assert!(first.is_expired(320));
        let next = first.chain(50);
        assert!(!next.is_expired(349));
        assert!(next.is_expired(350));
    }

    #[test]
    fn test_stopwatch() {
        let sw = Stopwatch::start(5000);
        assert_eq!(sw.elapsed_ms(5000), 0);
        assert_eq!(sw.elapsed_ms(15_000), 10_000);
        assert_eq!(sw.started_at(), 5000);
    }
}
