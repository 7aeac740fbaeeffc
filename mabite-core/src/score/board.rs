//! Volatile best-score board
//!
//! Zeroed at power-up; a slot only ever improves.

#[cfg(feature = "defmt")]
use defmt::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which best a result competes for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScoreKind {
    /// Simon round counter (higher is better)
    Sequence,
    /// Timing deviation in ms (lower is better, 0 = unset)
    TimingDeviation,
    /// Reaction mean in ms (lower is better, 0 = unset)
    ReactionMean,
    /// Global challenge score (higher is better)
    Global,
}

impl ScoreKind {
    pub const ALL: [ScoreKind; 4] = [
        ScoreKind::Sequence,
        ScoreKind::TimingDeviation,
        ScoreKind::ReactionMean,
        ScoreKind::Global,
    ];

    pub fn lower_is_better(self) -> bool {
        matches!(self, ScoreKind::TimingDeviation | ScoreKind::ReactionMean)
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Best result per game mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreBoard {
    best: [u32; 4],
}

impl ScoreBoard {
    pub const fn new() -> Self {
        Self { best: [0; 4] }
    }

    /// Offer a session result; returns whether the best changed
    ///
    /// Lower-is-better kinds treat 0 as "no result": a zero value is never
    /// stored, and an unset slot accepts any positive value. Higher-is-better
    /// kinds accept strictly greater values.
    pub fn submit(&mut self, kind: ScoreKind, value: u32) -> bool {
        let current = self.best[kind.slot()];
        let improved = if kind.lower_is_better() {
            value > 0 && (current == 0 || value < current)
        } else {
            value > current
        };

        if improved {
            self.best[kind.slot()] = value;
            #[cfg(feature = "defmt")]
            info!("New best {}: {}", kind, value);
        }
        improved
    }

    /// Current best, `None` when unset
    pub fn best(&self, kind: ScoreKind) -> Option<u32> {
        match self.best[kind.slot()] {
            0 => None,
            v => Some(v),
        }
    }

    pub fn best_sequence_length(&self) -> u32 {
        self.best[ScoreKind::Sequence.slot()]
    }

    pub fn best_timing_deviation_ms(&self) -> u32 {
        self.best[ScoreKind::TimingDeviation.slot()]
    }

    pub fn best_reaction_mean_ms(&self) -> u32 {
        self.best[ScoreKind::ReactionMean.slot()]
    }

    pub fn best_global_score(&self) -> u32 {
        self.best[ScoreKind::Global.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_unset() {
        let board = ScoreBoard::new();
        for kind in ScoreKind::ALL {
            assert_eq!(board.best(kind), None);
        }
    }

    #[test]
    fn test_higher_is_better() {
        let mut board = ScoreBoard::new();
        assert!(board.submit(ScoreKind::Sequence, 3));
        assert!(!board.submit(ScoreKind::Sequence, 3));
        assert!(!board.submit(ScoreKind::Sequence, 2));
        assert!(board.submit(ScoreKind::Sequence, 7));
        assert_eq!(board.best_sequence_length(), 7);
    }

    #[test]
    fn test_lower_is_better_with_sentinel() {
        let mut board = ScoreBoard::new();
        assert!(!board.submit(ScoreKind::TimingDeviation, 0));
        assert!(board.submit(ScoreKind::TimingDeviation, 250));
        assert!(board.submit(ScoreKind::TimingDeviation, 50));
        assert!(!board.submit(ScoreKind::TimingDeviation, 80));
        // A perfect zero never overwrites the best
        assert!(!board.submit(ScoreKind::TimingDeviation, 0));
        assert_eq!(board.best(ScoreKind::TimingDeviation), Some(50));
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut board = ScoreBoard::new();
        board.submit(ScoreKind::ReactionMean, 320);
        board.submit(ScoreKind::Global, 383);
        assert_eq!(board.best_reaction_mean_ms(), 320);
        assert_eq!(board.best_global_score(), 383);
        assert_eq!(board.best_timing_deviation_ms(), 0);
        assert_eq!(board.best_sequence_length(), 0);
    }

    proptest! {
        #[test]
        fn prop_higher_best_is_running_max(values in prop::collection::vec(0u32..1000, 1..40)) {
            let mut board = ScoreBoard::new();
            let mut prev = 0;
            for &v in &values {
                board.submit(ScoreKind::Sequence, v);
                prop_assert!(board.best_sequence_length() >= prev);
                prev = board.best_sequence_length();
            }
            prop_assert_eq!(prev, values.iter().copied().max().unwrap_or(0));
        }

        #[test]
        fn prop_lower_best_is_positive_min(values in prop::collection::vec(0u32..1000, 1..40)) {
            let mut board = ScoreBoard::new();
            for &v in &values {
                board.submit(ScoreKind::ReactionMean, v);
            }
            let expected = values.iter().copied().filter(|&v| v > 0).min();
            prop_assert_eq!(board.best(ScoreKind::ReactionMean), expected);
        }
    }
}
