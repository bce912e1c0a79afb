//! Board occupancy state.
//!
//! `BoardState` is the single source of truth for what is where: a
//! row-major grid of optional tile ids plus a vacant-coordinate index kept
//! in lock-step with it.
//!
//! ## The vacancy invariant
//!
//! A coordinate is in the vacant index **iff** its grid cell is empty.
//! Every mutator updates both structures together; a desync is a
//! programmer error and panics immediately rather than being tolerated.
//! The index exists so the spawner can pick a random vacant coordinate by
//! index instead of scanning the whole grid.

use serde::{Deserialize, Serialize};

use crate::core::Coordinate;
use crate::tiles::TileId;

/// The N x N occupancy grid plus its vacant-coordinate index.
///
/// ## Example
///
/// ```
/// use merge_grid::board::BoardState;
/// use merge_grid::core::Coordinate;
/// use merge_grid::tiles::TileId;
///
/// let mut board = BoardState::new(3);
/// assert_eq!(board.vacant_count(), 9);
///
/// let at = Coordinate::new(1, 1);
/// board.place(at, TileId::new(0));
/// assert!(board.is_occupied(at));
/// assert_eq!(board.vacant_count(), 8);
///
/// assert_eq!(board.remove(at), TileId::new(0));
/// assert_eq!(board.vacant_count(), 9);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardState {
    size: usize,
    cells: Vec<Option<TileId>>,
    vacant: Vec<Coordinate>,
}

impl BoardState {
    /// Create an empty board; every coordinate starts vacant.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= 2, "Board size must be at least 2");

        let mut vacant = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                vacant.push(Coordinate::new(row, col));
            }
        }

        Self {
            size,
            cells: vec![None; size * size],
            vacant,
        }
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether a coordinate holds a tile.
    #[must_use]
    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.cells[self.index(coord)].is_some()
    }

    /// The tile at a coordinate, if any.
    #[must_use]
    pub fn get(&self, coord: Coordinate) -> Option<TileId> {
        self.cells[self.index(coord)]
    }

    /// Place a tile at a vacant coordinate.
    ///
    /// Panics if the cell is already occupied - placing over a live tile
    /// means the caller's bookkeeping is broken.
    pub fn place(&mut self, coord: Coordinate, tile: TileId) {
        let index = self.index(coord);
        assert!(
            self.cells[index].is_none(),
            "Placed {:?} into occupied cell {}",
            tile,
            coord
        );

        let vacant_index = self
            .vacant
            .iter()
            .position(|&c| c == coord)
            .expect("Vacant index desynced from grid");
        self.vacant.swap_remove(vacant_index);

        self.cells[index] = Some(tile);
    }

    /// Remove and return the tile at a coordinate.
    ///
    /// Panics if the cell is empty.
    pub fn remove(&mut self, coord: Coordinate) -> TileId {
        let index = self.index(coord);
        let tile = match self.cells[index].take() {
            Some(tile) => tile,
            None => panic!("Removed from empty cell {}", coord),
        };
        self.vacant.push(coord);
        tile
    }

    /// The vacant coordinates, in no particular order.
    #[must_use]
    pub fn vacant_coordinates(&self) -> &[Coordinate] {
        &self.vacant
    }

    /// Number of vacant coordinates.
    #[must_use]
    pub fn vacant_count(&self) -> usize {
        self.vacant.len()
    }

    /// Check whether every cell holds a tile.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.vacant.is_empty()
    }

    /// Iterate over occupied coordinates and their tiles, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, TileId)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|tile| (Coordinate::new(i / self.size, i % self.size), tile))
        })
    }

    fn index(&self, coord: Coordinate) -> usize {
        assert!(
            coord.row < self.size && coord.col < self.size,
            "Coordinate {} out of range for a {}x{} board",
            coord,
            self.size,
            self.size
        );
        coord.row * self.size + coord.col
    }
}
