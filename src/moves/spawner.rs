//! Tile spawner.
//!
//! After each settled move exactly one new tile materializes at a
//! uniformly random vacant coordinate, at the ladder's base value.

use super::effect::Effect;
use crate::board::BoardState;
use crate::core::GameRng;
use crate::tiles::{Ladder, TileRegistry};

/// Stateless spawner for post-settlement tile generation.
pub struct TileSpawner;

impl TileSpawner {
    /// Spawn one base-value tile at a random vacant coordinate.
    ///
    /// Returns `None` if the board is full. A settled move always leaves
    /// at least one vacancy (slides require one, merges create one), so
    /// `None` only happens if the caller spawns without having moved.
    pub fn spawn(
        board: &mut BoardState,
        tiles: &mut TileRegistry,
        ladder: &Ladder,
        rng: &mut GameRng,
    ) -> Option<Effect> {
        if board.vacant_count() == 0 {
            return None;
        }

        let index = rng.gen_range_usize(0..board.vacant_count());
        let at = board.vacant_coordinates()[index];

        let value = ladder.base_value();
        let tile = tiles.create(value);
        board.place(at, tile);

        Some(Effect::spawn(tile, at, value))
    }
}
