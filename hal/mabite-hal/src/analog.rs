//! Analog input abstraction

/// Full-scale reading of the 12-bit converter
pub const ADC_MAX: u16 = 4095;

/// Errors from an analog conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnalogError {
    /// Conversion did not complete
    Conversion,
}

/// Single ADC channel
pub trait AnalogInput {
    /// Take one 12-bit sample
    fn read_raw(&mut self) -> Result<u16, AnalogError>;
}

/// Build a generator seed from the low bits of repeated samples
///
/// An unconnected or slowly moving analog input jitters in its least
/// significant bits. Failed conversions are skipped.
pub fn collect_entropy<A: AnalogInput + ?Sized>(input: &mut A, samples: usize) -> u64 {
    let mut seed: u64 = 0xcbf2_9ce4_8422_2325;
    for _ in 0..samples {
        if let Ok(raw) = input.read_raw() {
            seed ^= u64::from(raw & 0x0f);
            seed = seed.wrapping_mul(0x0000_0100_0000_01b3);
        }
    }
    seed
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noisy {
        next: u16,
    }

    impl AnalogInput for Noisy {
        fn read_raw(&mut self) -> Result<u16, AnalogError> {
            self.next = self.next.wrapping_mul(37).wrapping_add(11) & ADC_MAX;
            Ok(self.next)
        }
    }

    struct Dead;

    impl AnalogInput for Dead {
        fn read_raw(&mut self) -> Result<u16, AnalogError> {
            Err(AnalogError::Conversion)
        }
    }

    #[test]
    fn test_entropy_depends_on_samples() {
        let a = collect_entropy(&mut Noisy { next: 1 }, 32);
        let b = collect_entropy(&mut Noisy { next: 2 }, 32);
        assert_ne!(a, b);
        assert_eq!(a, collect_entropy(&mut Noisy { next: 1 }, 32));
    }

    #[test]
    fn test_entropy_skips_failures() {
        let seed = collect_entropy(&mut Dead, 16);
        assert_eq!(seed, collect_entropy(&mut Dead, 0));
    }
}
