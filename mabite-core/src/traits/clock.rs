//! Monotonic millisecond clock

/// Trait for the system clock
///
/// The value wraps after about 49 days; all elapsed-time arithmetic in
/// this crate uses wrapping subtraction.
pub trait Clock {
    fn now_ms(&self) -> u32;
}
