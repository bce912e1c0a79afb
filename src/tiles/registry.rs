//! Tile registry: storage for live tiles.
//!
//! The registry owns every tile currently on the board and nothing else -
//! no game logic, just id allocation and lookup. Position is the board's
//! concern.

use rustc_hash::FxHashMap;

use super::tile::{Tile, TileId};

/// Registry of live tiles.
///
/// ## Example
///
/// ```
/// use merge_grid::tiles::TileRegistry;
///
/// let mut tiles = TileRegistry::new();
/// let id = tiles.create(2);
/// assert_eq!(tiles.get(id).unwrap().value, 2);
///
/// let removed = tiles.remove(id);
/// assert_eq!(removed.value, 2);
/// assert!(tiles.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TileRegistry {
    tiles: FxHashMap<TileId, Tile>,
    next_id: u32,
}

impl TileRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new tile with the given value, returning its id.
    ///
    /// Ids are allocated monotonically and never reused within a game.
    pub fn create(&mut self, value: u32) -> TileId {
        let id = TileId::new(self.next_id);
        self.next_id += 1;
        self.tiles.insert(id, Tile::new(id, value));
        id
    }

    /// Get a tile by id.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// Get a tile by id, panicking if it is not live.
    ///
    /// Use when the id came from the board, which only holds live tiles.
    #[must_use]
    pub fn get_unchecked(&self, id: TileId) -> &Tile {
        self.tiles.get(&id).expect("Tile not found in registry")
    }

    /// The value of a live tile.
    ///
    /// Panics if the tile is not live (programmer error).
    #[must_use]
    pub fn value_of(&self, id: TileId) -> u32 {
        self.get_unchecked(id).value
    }

    /// Set the value of a live tile (the merge survivor's promotion).
    ///
    /// Panics if the tile is not live.
    pub fn set_value(&mut self, id: TileId, value: u32) {
        self.tiles
            .get_mut(&id)
            .expect("Tile not found in registry")
            .value = value;
    }

    /// Remove a tile, returning it.
    ///
    /// Panics if the tile is not live - removing a dead tile means the
    /// board and registry have desynced.
    pub fn remove(&mut self, id: TileId) -> Tile {
        match self.tiles.remove(&id) {
            Some(tile) => tile,
            None => panic!("Removed tile {:?} that is not in the registry", id),
        }
    }

    /// Check if a tile is live.
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.contains_key(&id)
    }

    /// Number of live tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if there are no live tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over live tiles (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }
}
