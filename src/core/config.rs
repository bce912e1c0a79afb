//! Game configuration.
//!
//! A game is configured at startup with its board size, the tile value
//! ladder, and the win threshold. The engine hardcodes none of these; the
//! classic 4x4, 2-through-2048 game is just one configuration.

use serde::{Deserialize, Serialize};

use crate::tiles::Ladder;

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use merge_grid::core::GameConfig;
/// use merge_grid::tiles::Ladder;
///
/// // The classic game
/// let classic = GameConfig::classic();
/// assert_eq!(classic.board_size, 4);
/// assert_eq!(classic.win_value, 2048);
///
/// // A small custom game: win at 8 on a 3x3 board
/// let small = GameConfig::new(3)
///     .with_ladder(Ladder::from_values(&[2, 4, 8, 16]))
///     .with_win_value(8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length (the board is `board_size` x `board_size`).
    pub board_size: usize,

    /// The tile value ladder.
    pub ladder: Ladder,

    /// The value a merge must produce to win. Always a ladder value,
    /// configurable separately from the ladder's maximum.
    pub win_value: u32,
}

impl GameConfig {
    /// Create a configuration with the classic ladder and the given board
    /// size, winning at the ladder's maximum.
    ///
    /// Panics unless `2 <= board_size <= 10`.
    #[must_use]
    pub fn new(board_size: usize) -> Self {
        assert!(
            (2..=10).contains(&board_size),
            "Board size must be between 2 and 10"
        );

        let ladder = Ladder::classic();
        let win_value = ladder.max_value();
        Self {
            board_size,
            ladder,
            win_value,
        }
    }

    /// The classic game: 4x4 board, 2 through 2048, win at 2048.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(4)
    }

    /// Replace the ladder (builder pattern).
    ///
    /// Resets the win threshold to the new ladder's maximum; call
    /// `with_win_value` afterwards to lower it.
    #[must_use]
    pub fn with_ladder(mut self, ladder: Ladder) -> Self {
        self.win_value = ladder.max_value();
        self.ladder = ladder;
        self
    }

    /// Set the win threshold (builder pattern).
    ///
    /// Panics if the value is not in the ladder.
    #[must_use]
    pub fn with_win_value(mut self, value: u32) -> Self {
        assert!(
            self.ladder.contains(value),
            "Win value {} is not a ladder value",
            value
        );
        self.win_value = value;
        self
    }

    /// Total number of board cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.board_size * self.board_size
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic() {
        let config = GameConfig::classic();
        assert_eq!(config.board_size, 4);
        assert_eq!(config.cell_count(), 16);
        assert_eq!(config.ladder.base_value(), 2);
        assert_eq!(config.win_value, 2048);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(3)
            .with_ladder(Ladder::from_values(&[2, 4, 8, 16]))
            .with_win_value(8);

        assert_eq!(config.board_size, 3);
        assert_eq!(config.ladder.max_value(), 16);
        assert_eq!(config.win_value, 8);
    }

    #[test]
    fn test_with_ladder_resets_win_value() {
        let config = GameConfig::new(4).with_ladder(Ladder::from_values(&[2, 4, 8]));
        assert_eq!(config.win_value, 8);
    }

    #[test]
    #[should_panic(expected = "between 2 and 10")]
    fn test_board_too_small() {
        GameConfig::new(1);
    }

    #[test]
    #[should_panic(expected = "between 2 and 10")]
    fn test_board_too_large() {
        GameConfig::new(11);
    }

    #[test]
    #[should_panic(expected = "not a ladder value")]
    fn test_win_value_off_ladder() {
        let _ = GameConfig::new(4).with_win_value(3000);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::classic();
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
