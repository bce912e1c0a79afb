//! Terminal-condition detection.
//!
//! Runs once per settled round, after the spawn attempt. The game is over
//! when the board is full and no two adjacent cells (either axis) share a
//! value - i.e. no direction can produce an effect.

use crate::board::BoardState;
use crate::core::Coordinate;
use crate::tiles::TileRegistry;

/// Stateless terminal-condition evaluator.
pub struct TerminalEvaluator;

impl TerminalEvaluator {
    /// Can any direction still change the board?
    ///
    /// True if a vacancy exists (something can always slide or a spawn
    /// fit), or if any horizontally or vertically adjacent pair of tiles
    /// share a value.
    #[must_use]
    pub fn can_move(board: &BoardState, tiles: &TileRegistry) -> bool {
        if board.vacant_count() > 0 {
            return true;
        }

        // Full board: every cell is occupied.
        let value_at = |coord: Coordinate| {
            tiles.value_of(board.get(coord).expect("Full board has an empty cell"))
        };
        let size = board.size();

        for row in 0..size {
            for col in 0..size - 1 {
                if value_at(Coordinate::new(row, col)) == value_at(Coordinate::new(row, col + 1)) {
                    return true;
                }
            }
        }

        for col in 0..size {
            for row in 0..size - 1 {
                if value_at(Coordinate::new(row, col)) == value_at(Coordinate::new(row + 1, col)) {
                    return true;
                }
            }
        }

        false
    }
}
