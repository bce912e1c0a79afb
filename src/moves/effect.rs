//! Move effects.
//!
//! Effects are the atomic board mutations a move or spawn produces. The
//! logical mutation happens immediately when the effect is produced; the
//! effect itself is the notification the presentation layer animates.

use serde::{Deserialize, Serialize};

use crate::core::Coordinate;
use crate::tiles::TileId;

/// A single atomic board mutation.
///
/// ## Settlement
///
/// `Slide` and `Merge` register one outstanding transition each with the
/// settlement tracker; the presentation layer reports each back exactly
/// once when its animation finishes. `Spawn` appear-animations never gate
/// settlement (see `needs_settlement`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// A tile moved to a vacant cell.
    Slide {
        tile: TileId,
        from: Coordinate,
        to: Coordinate,
    },

    /// Two equal tiles combined; the absorbed tile is destroyed and the
    /// survivor now holds `value`.
    Merge {
        survivor: TileId,
        absorbed: TileId,
        from: Coordinate,
        into: Coordinate,
        value: u32,
    },

    /// A new tile materialized at a previously vacant cell.
    Spawn {
        tile: TileId,
        at: Coordinate,
        value: u32,
    },
}

impl Effect {
    /// Create a slide effect.
    #[must_use]
    pub const fn slide(tile: TileId, from: Coordinate, to: Coordinate) -> Self {
        Self::Slide { tile, from, to }
    }

    /// Create a merge effect.
    #[must_use]
    pub const fn merge(
        survivor: TileId,
        absorbed: TileId,
        from: Coordinate,
        into: Coordinate,
        value: u32,
    ) -> Self {
        Self::Merge {
            survivor,
            absorbed,
            from,
            into,
            value,
        }
    }

    /// Create a spawn effect.
    #[must_use]
    pub const fn spawn(tile: TileId, at: Coordinate, value: u32) -> Self {
        Self::Spawn { tile, at, value }
    }

    /// Does this effect hold the board `Busy` until its animation is
    /// reported complete?
    #[must_use]
    pub const fn needs_settlement(&self) -> bool {
        matches!(self, Self::Slide { .. } | Self::Merge { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_settlement() {
        let a = Coordinate::new(0, 0);
        let b = Coordinate::new(0, 1);

        assert!(Effect::slide(TileId::new(0), b, a).needs_settlement());
        assert!(Effect::merge(TileId::new(0), TileId::new(1), b, a, 4).needs_settlement());
        assert!(!Effect::spawn(TileId::new(2), a, 2).needs_settlement());
    }

    #[test]
    fn test_serialization() {
        let effect = Effect::merge(
            TileId::new(0),
            TileId::new(1),
            Coordinate::new(0, 1),
            Coordinate::new(0, 0),
            4,
        );
        let json = serde_json::to_string(&effect).unwrap();
        let back: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, back);
    }
}
