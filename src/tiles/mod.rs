//! Tile system: entities, the value ladder, and the registry.
//!
//! ## Key Types
//!
//! - `TileId`: Identifier for a live tile
//! - `Tile`: A live tile (id + value); position belongs to the board
//! - `Ladder`: Ordered, strictly-doubling value table with display styles
//! - `TileRegistry`: Tile storage and id allocation

pub mod ladder;
pub mod registry;
pub mod tile;

pub use ladder::{Ladder, LadderEntry, Rgb, TileStyle};
pub use registry::TileRegistry;
pub use tile::{Tile, TileId};
