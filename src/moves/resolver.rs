//! The slide/merge resolution algorithm.
//!
//! One move resolves each line (row for horizontal directions, column for
//! vertical) independently - lines never interact, so they can be
//! processed in any order. Within a line a **frontier** cursor compacts
//! tiles toward the leading edge:
//!
//! - Empty frontier cell: the tile slides into it; the frontier stays put
//!   so the next tile may merge there.
//! - Equal value at the frontier, not yet merged this move: the tiles
//!   combine and the frontier advances past the merged cell, closing it
//!   against a second merge.
//! - Otherwise the frontier advances and the tile packs in behind it,
//!   sliding only if its position actually changes.
//!
//! Effects mutate the board and registry the moment they are produced;
//! only their visual presentation is deferred. A line that is already
//! fully compacted contributes no effects.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::effect::Effect;
use crate::board::BoardState;
use crate::core::{Coordinate, Direction};
use crate::tiles::{Ladder, TileRegistry};

/// The effects one move produced, in resolution order.
///
/// Empty iff the move changed nothing (a no-op move).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Effects in the order they were applied.
    /// SmallVec keeps a classic 4x4 move (at most 16 effects) off the heap.
    pub effects: SmallVec<[Effect; 16]>,
}

impl MoveOutcome {
    /// Did the move change the board at all?
    #[must_use]
    pub fn moved(&self) -> bool {
        !self.effects.is_empty()
    }

    /// Number of outstanding transitions this move registers.
    #[must_use]
    pub fn transition_count(&self) -> usize {
        self.effects.iter().filter(|e| e.needs_settlement()).count()
    }

    /// Iterate over the effects in application order.
    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }
}

/// Stateless resolver for one move in one direction.
pub struct MoveResolver;

impl MoveResolver {
    /// Resolve a move, applying every effect to `board` and `tiles` as it
    /// is produced.
    ///
    /// Two tiles already at the ladder's terminal value have no successor
    /// and are treated as unequal: they pack together but never combine.
    pub fn resolve(
        board: &mut BoardState,
        tiles: &mut TileRegistry,
        ladder: &Ladder,
        direction: Direction,
    ) -> MoveOutcome {
        let size = board.size();
        let mut outcome = MoveOutcome::default();

        for line in 0..size {
            let mut frontier = 0;

            // Step 0 is the leading edge itself; it can never move.
            for step in 1..size {
                let from = line_coord(direction, line, step, size);
                let Some(moving) = board.get(from) else {
                    continue;
                };
                if frontier == step {
                    continue;
                }

                let front = line_coord(direction, line, frontier, size);
                match board.get(front) {
                    None => {
                        // Frontier stays: a following tile may merge here.
                        board.remove(from);
                        board.place(front, moving);
                        outcome.effects.push(Effect::slide(moving, from, front));
                    }
                    Some(stationary) => {
                        let moving_value = tiles.value_of(moving);
                        let promoted = if tiles.value_of(stationary) == moving_value {
                            ladder.next_value(moving_value)
                        } else {
                            None
                        };

                        if let Some(value) = promoted {
                            board.remove(from);
                            tiles.remove(moving);
                            tiles.set_value(stationary, value);
                            outcome
                                .effects
                                .push(Effect::merge(stationary, moving, from, front, value));
                            // The merged cell is closed for the rest of
                            // this move.
                            frontier += 1;
                        } else {
                            frontier += 1;
                            if frontier == step {
                                continue;
                            }
                            let to = line_coord(direction, line, frontier, size);
                            board.remove(from);
                            board.place(to, moving);
                            outcome.effects.push(Effect::slide(moving, from, to));
                        }
                    }
                }
            }
        }

        outcome
    }
}

/// The coordinate `step` cells from the leading edge of `line`, walking
/// in the direction of travel.
fn line_coord(direction: Direction, line: usize, step: usize, size: usize) -> Coordinate {
    let last = size - 1;
    match direction {
        Direction::Left => Coordinate::new(line, step),
        Direction::Right => Coordinate::new(line, last - step),
        Direction::Up => Coordinate::new(step, line),
        Direction::Down => Coordinate::new(last - step, line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a board from rows of values; 0 means empty.
    fn board_from_rows(tiles: &mut TileRegistry, rows: &[&[u32]]) -> BoardState {
        let size = rows.len();
        let mut board = BoardState::new(size);
        for (row, values) in rows.iter().enumerate() {
            assert_eq!(values.len(), size, "rows must be square");
            for (col, &value) in values.iter().enumerate() {
                if value != 0 {
                    let id = tiles.create(value);
                    board.place(Coordinate::new(row, col), id);
                }
            }
        }
        board
    }

    /// Read the board back as rows of values; 0 means empty.
    fn rows_of(board: &BoardState, tiles: &TileRegistry) -> Vec<Vec<u32>> {
        (0..board.size())
            .map(|row| {
                (0..board.size())
                    .map(|col| {
                        board
                            .get(Coordinate::new(row, col))
                            .map_or(0, |id| tiles.value_of(id))
                    })
                    .collect()
            })
            .collect()
    }

    fn resolve(
        board: &mut BoardState,
        tiles: &mut TileRegistry,
        direction: Direction,
    ) -> MoveOutcome {
        MoveResolver::resolve(board, tiles, &Ladder::classic(), direction)
    }

    #[test]
    fn test_slide_into_empty() {
        let mut tiles = TileRegistry::new();
        let mut board = board_from_rows(&mut tiles, &[&[0, 0, 2], &[0, 0, 0], &[0, 0, 0]]);

        let outcome = resolve(&mut board, &mut tiles, Direction::Left);

        assert_eq!(rows_of(&board, &tiles)[0], vec![2, 0, 0]);
        assert_eq!(outcome.effects.len(), 1);
        assert!(matches!(outcome.effects[0], Effect::Slide { .. }));
    }

    #[test]
    fn test_adjacent_pair_merges() {
        let mut tiles = TileRegistry::new();
        let mut board = board_from_rows(&mut tiles, &[&[2, 2, 0], &[0, 0, 0], &[0, 0, 0]]);

        let outcome = resolve(&mut board, &mut tiles, Direction::Left);

        assert_eq!(rows_of(&board, &tiles)[0], vec![4, 0, 0]);
        assert_eq!(outcome.effects.len(), 1);
        match outcome.effects[0] {
            Effect::Merge { value, .. } => assert_eq!(value, 4),
            other => panic!("Expected a merge, got {:?}", other),
        }
    }

    #[test]
    fn test_gap_pair_merges() {
        let mut tiles = TileRegistry::new();
        let mut board = board_from_rows(&mut tiles, &[&[2, 0, 2], &[0, 0, 0], &[0, 0, 0]]);

        resolve(&mut board, &mut tiles, Direction::Left);

        assert_eq!(rows_of(&board, &tiles)[0], vec![4, 0, 0]);
    }

    #[test]
    fn test_blocked_line_is_noop() {
        let mut tiles = TileRegistry::new();
        let mut board = board_from_rows(&mut tiles, &[&[2, 4, 2], &[0, 0, 0], &[0, 0, 0]]);

        let outcome = resolve(&mut board, &mut tiles, Direction::Left);

        assert_eq!(rows_of(&board, &tiles)[0], vec![2, 4, 2]);
        assert!(!outcome.moved());
        assert_eq!(outcome.transition_count(), 0);
    }

    #[test]
    fn test_triple_merges_leading_pair_only() {
        let mut tiles = TileRegistry::new();
        let mut board = board_from_rows(&mut tiles, &[&[2, 2, 2], &[0, 0, 0], &[0, 0, 0]]);

        let outcome = resolve(&mut board, &mut tiles, Direction::Left);

        // The first pair merges; the third tile packs in beside the merged
        // cell without chaining into it.
        assert_eq!(rows_of(&board, &tiles)[0], vec![4, 2, 0]);
        assert_eq!(outcome.effects.len(), 2);
    }

    #[test]
    fn test_two_pairs_merge_independently() {
        let mut tiles = TileRegistry::new();
        let mut board = board_from_rows(
            &mut tiles,
            &[&[2, 2, 4, 4], &[0; 4], &[0; 4], &[0; 4]],
        );

        resolve(&mut board, &mut tiles, Direction::Left);

        assert_eq!(rows_of(&board, &tiles)[0], vec![4, 8, 0, 0]);
    }

    #[test]
    fn test_slid_tile_can_still_merge() {
        let mut tiles = TileRegistry::new();
        let mut board = board_from_rows(
            &mut tiles,
            &[&[2, 2, 4, 4], &[0; 4], &[0; 4], &[0; 4]],
        );

        // Left: [2,2,4,4] -> [4,8,_,_]. The second 4 merges into a 4 that
        // itself slid this move - sliding does not close a cell, merging
        // does.
        let outcome = resolve(&mut board, &mut tiles, Direction::Left);
        assert_eq!(rows_of(&board, &tiles)[0], vec![4, 8, 0, 0]);
        assert_eq!(
            outcome.iter().filter(|e| matches!(e, Effect::Merge { .. })).count(),
            2
        );
    }

    #[test]
    fn test_right_direction() {
        let mut tiles = TileRegistry::new();
        let mut board = board_from_rows(&mut tiles, &[&[2, 2, 0], &[0, 0, 0], &[0, 0, 0]]);

        resolve(&mut board, &mut tiles, Direction::Right);

        assert_eq!(rows_of(&board, &tiles)[0], vec![0, 0, 4]);
    }

    #[test]
    fn test_up_direction() {
        let mut tiles = TileRegistry::new();
        let mut board = board_from_rows(&mut tiles, &[&[0, 0, 0], &[2, 0, 0], &[2, 0, 0]]);

        resolve(&mut board, &mut tiles, Direction::Up);

        let rows = rows_of(&board, &tiles);
        assert_eq!(rows[0][0], 4);
        assert_eq!(rows[1][0], 0);
        assert_eq!(rows[2][0], 0);
    }

    #[test]
    fn test_down_direction() {
        let mut tiles = TileRegistry::new();
        let mut board = board_from_rows(&mut tiles, &[&[4, 0, 0], &[0, 0, 0], &[2, 0, 0]]);

        resolve(&mut board, &mut tiles, Direction::Down);

        let rows = rows_of(&board, &tiles);
        assert_eq!(rows[1][0], 4);
        assert_eq!(rows[2][0], 2);
    }

    #[test]
    fn test_lines_do_not_interact() {
        let mut tiles = TileRegistry::new();
        let mut board = board_from_rows(&mut tiles, &[&[2, 2, 0], &[2, 0, 2], &[0, 4, 4]]);

        resolve(&mut board, &mut tiles, Direction::Left);

        let rows = rows_of(&board, &tiles);
        assert_eq!(rows[0], vec![4, 0, 0]);
        assert_eq!(rows[1], vec![4, 0, 0]);
        assert_eq!(rows[2], vec![8, 0, 0]);
    }

    #[test]
    fn test_terminal_value_does_not_merge() {
        let mut tiles = TileRegistry::new();
        let mut board = board_from_rows(
            &mut tiles,
            &[&[2048, 2048, 0], &[0, 0, 0], &[0, 0, 0]],
        );

        let outcome = resolve(&mut board, &mut tiles, Direction::Left);

        // Already packed against the edge, so nothing moves either.
        assert_eq!(rows_of(&board, &tiles)[0], vec![2048, 2048, 0]);
        assert!(!outcome.moved());
    }

    #[test]
    fn test_terminal_value_still_slides() {
        let mut tiles = TileRegistry::new();
        let mut board = board_from_rows(
            &mut tiles,
            &[&[0, 2048, 2048], &[0, 0, 0], &[0, 0, 0]],
        );

        let outcome = resolve(&mut board, &mut tiles, Direction::Left);

        assert_eq!(rows_of(&board, &tiles)[0], vec![2048, 2048, 0]);
        assert_eq!(outcome.effects.len(), 2);
        assert!(outcome.iter().all(|e| matches!(e, Effect::Slide { .. })));
    }

    #[test]
    fn test_merge_destroys_absorbed_tile() {
        let mut tiles = TileRegistry::new();
        let mut board = board_from_rows(&mut tiles, &[&[2, 2, 0], &[0, 0, 0], &[0, 0, 0]]);
        assert_eq!(tiles.len(), 2);

        resolve(&mut board, &mut tiles, Direction::Left);

        assert_eq!(tiles.len(), 1);
        let survivor = board.get(Coordinate::new(0, 0)).unwrap();
        assert_eq!(tiles.value_of(survivor), 4);
    }
}
