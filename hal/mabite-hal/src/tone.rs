//! Square-wave tone output
//!
//! The piezo is driven by a PWM slice at 50% duty. [`tone_timing`] picks
//! the clock divider and wrap value for a requested pitch; the chip HAL
//! only has to load them.

/// Largest 8.4 fixed-point divider the PWM block accepts, in 1/16 steps
pub const MAX_DIVIDER_16THS: u32 = 255 * 16 + 15;

/// Largest counter wrap value
pub const MAX_TOP: u32 = u16::MAX as u32;

/// Divider and wrap settings for one pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneTiming {
    /// Clock divider in 1/16 units (8.4 fixed point)
    pub divider_16ths: u16,
    /// Counter wraps after `top + 1` divided clocks
    pub top: u16,
    /// Compare value for 50% duty
    pub compare: u16,
}

impl ToneTiming {
    /// Frequency these settings actually produce
    pub fn actual_hz(&self, sys_hz: u32) -> u32 {
        let period = u64::from(self.divider_16ths) * (u64::from(self.top) + 1);
        (u64::from(sys_hz) * 16 / period) as u32
    }
}

/// Compute PWM settings for `freq_hz`
///
/// Uses the smallest divider that lets the counter fit in 16 bits, which
/// keeps the wrap value (and so pitch resolution) as large as possible.
/// Returns `None` for 0 Hz or pitches outside the block's range.
pub fn tone_timing(sys_hz: u32, freq_hz: u16) -> Option<ToneTiming> {
    if freq_hz == 0 {
        return None;
    }
    let clocks_16ths = u64::from(sys_hz) * 16;
    let freq = u64::from(freq_hz);

    let per_wrap = freq * (MAX_TOP as u64 + 1);
    let divider = clocks_16ths.div_ceil(per_wrap).max(16);
    if divider > MAX_DIVIDER_16THS as u64 {
        return None;
    }

    let counts = clocks_16ths / (divider * freq);
    if counts < 2 {
        return None;
    }
    let top = (counts - 1) as u16;
    Some(ToneTiming {
        divider_16ths: divider as u16,
        top,
        compare: ((u32::from(top) + 1) / 2) as u16,
    })
}

/// PWM channel wired to the piezo
pub trait ToneOutput {
    /// Start (or retune) a square wave
    fn set_frequency(&mut self, freq_hz: u16);

    /// Stop the wave and leave the pin low
    fn silence(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYS_HZ: u32 = 125_000_000;

    #[test]
    fn test_zero_is_silence() {
        assert_eq!(tone_timing(SYS_HZ, 0), None);
    }

    #[test]
    fn test_a4() {
        let t = tone_timing(SYS_HZ, 440).unwrap();
        // 125 MHz / 440 Hz needs a divider just above 4.33
        assert_eq!(t.divider_16ths, 70);
        assert_eq!(t.compare, (t.top + 1) / 2);
        assert!(t.actual_hz(SYS_HZ).abs_diff(440) <= 1);
    }

    #[test]
    fn test_low_and_high_notes_stay_close() {
        for freq in [131u16, 156, 196, 262, 523, 1047, 1568, 4000] {
            let t = tone_timing(SYS_HZ, freq).unwrap();
            assert!(t.divider_16ths as u32 <= MAX_DIVIDER_16THS);
            assert!(t.actual_hz(SYS_HZ).abs_diff(freq as u32) <= 1, "freq {}", freq);
        }
    }

    #[test]
    fn test_high_notes_use_unit_divider() {
        let t = tone_timing(SYS_HZ, 4000).unwrap();
        assert_eq!(t.divider_16ths, 16);
        assert_eq!(t.top, 31_249);
    }

    #[test]
    fn test_out_of_range() {
        // Below about 7.5 Hz even the largest divider overflows the counter
        assert_eq!(tone_timing(SYS_HZ, 5), None);
    }
}
