//! Tile entities.
//!
//! A tile is a value on the board, nothing more. Its position is owned by
//! `BoardState` (the grid maps coordinates to ids) so there is exactly one
//! source of truth for "what is where".

use serde::{Deserialize, Serialize};

/// Unique identifier for a live tile.
///
/// Allocated by `TileRegistry`; never reused within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A live tile: an id plus its current value.
///
/// Created by the spawner at the ladder's base value; the value doubles on
/// each merge the tile survives; destroyed when absorbed by a merge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Unique id for this tile.
    pub id: TileId,
    /// Current value (always a ladder value).
    pub value: u32,
}

impl Tile {
    /// Create a tile.
    #[must_use]
    pub const fn new(id: TileId, value: u32) -> Self {
        Self { id, value }
    }
}
