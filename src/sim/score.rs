//! Score counter with clamped display formatting

use crate::consts::SCORE_DISPLAY_MAX;

/// Session score. The counter itself is never clamped or reset; only the
/// rendered display string is bounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreCounter {
    value: u64,
}

impl ScoreCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points for a confirmed hit
    pub fn increment(&mut self, amount: u64) {
        self.value += amount;
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Four-digit, zero-padded display string, clamped to 0..=9999
    pub fn render(&self) -> String {
        format!("{:04}", self.value.min(SCORE_DISPLAY_MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SCORE_PER_HIT;

    #[test]
    fn test_score_accumulates_per_hit() {
        let mut score = ScoreCounter::new();
        for _ in 0..7 {
            score.increment(SCORE_PER_HIT);
        }
        assert_eq!(score.value(), 70);
        assert_eq!(score.render(), "0070");
    }

    #[test]
    fn test_render_pads_to_four_digits() {
        let mut score = ScoreCounter::new();
        assert_eq!(score.render(), "0000");
        score.increment(7);
        assert_eq!(score.render(), "0007");
    }

    #[test]
    fn test_render_clamps_but_counter_does_not() {
        let mut score = ScoreCounter::new();
        score.increment(10042);
        assert_eq!(score.render(), "9999");
        // Underlying counter keeps the real total
        assert_eq!(score.value(), 10042);
        score.increment(SCORE_PER_HIT);
        assert_eq!(score.value(), 10052);
    }
}
