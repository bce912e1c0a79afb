//! Score accumulation.
//!
//! Every merge is worth the merged tile's new value. The engine keeps the
//! running total and the best seen across restarts; persisting the best
//! score anywhere is the caller's concern.

use serde::{Deserialize, Serialize};

/// Running and best score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    current: u64,
    best: u64,
}

impl ScoreBoard {
    /// Create a zeroed scoreboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a merge producing `value`.
    pub fn record_merge(&mut self, value: u32) {
        self.current += u64::from(value);
        if self.current > self.best {
            self.best = self.current;
        }
    }

    /// The running score for this game.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.current
    }

    /// The best score seen, including past games since construction.
    #[must_use]
    pub fn best(&self) -> u64 {
        self.best
    }

    /// Start a fresh game: zero the running score, keep the best.
    pub fn reset(&mut self) {
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_merge_accumulates() {
        let mut score = ScoreBoard::new();
        score.record_merge(4);
        score.record_merge(8);

        assert_eq!(score.current(), 12);
        assert_eq!(score.best(), 12);
    }

    #[test]
    fn test_reset_keeps_best() {
        let mut score = ScoreBoard::new();
        score.record_merge(16);
        score.reset();

        assert_eq!(score.current(), 0);
        assert_eq!(score.best(), 16);
    }

    #[test]
    fn test_best_only_rises() {
        let mut score = ScoreBoard::new();
        score.record_merge(32);
        score.reset();
        score.record_merge(4);

        assert_eq!(score.current(), 4);
        assert_eq!(score.best(), 32);
    }
}
