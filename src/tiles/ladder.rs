//! The tile value ladder.
//!
//! An ordered table of tile values, each double the previous, with the
//! display metadata the presentation layer needs (tile color, number
//! color). Merging two tiles of value `v` produces the entry after `v`;
//! the terminal entry has no successor, so two terminal tiles never
//! combine (see `next_value`).
//!
//! Successor lookup is total: asking past the terminal entry yields
//! `None` instead of running off the end of the table.

use serde::{Deserialize, Serialize};

/// An RGB color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// White, the default number color.
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// Display metadata for one tile value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileStyle {
    /// Tile background color.
    pub background: Rgb,
    /// Number color.
    pub text: Rgb,
}

impl TileStyle {
    /// Create a style with the given background and white text.
    #[must_use]
    pub const fn new(background: Rgb) -> Self {
        Self {
            background,
            text: Rgb::WHITE,
        }
    }

    /// Set the number color (builder pattern).
    #[must_use]
    pub const fn with_text(mut self, text: Rgb) -> Self {
        self.text = text;
        self
    }
}

/// One ladder entry: a value and how to draw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderEntry {
    /// Tile value.
    pub value: u32,
    /// Display metadata.
    pub style: TileStyle,
}

impl LadderEntry {
    /// Create a ladder entry.
    #[must_use]
    pub const fn new(value: u32, style: TileStyle) -> Self {
        Self { value, style }
    }
}

/// The ordered, strictly-doubling tile value table.
///
/// ## Example
///
/// ```
/// use merge_grid::tiles::Ladder;
///
/// let ladder = Ladder::classic();
/// assert_eq!(ladder.base_value(), 2);
/// assert_eq!(ladder.next_value(2), Some(4));
/// assert_eq!(ladder.next_value(2048), None); // terminal entry
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ladder {
    entries: Vec<LadderEntry>,
}

impl Ladder {
    /// Create a ladder from entries.
    ///
    /// Panics if the table is empty or any value is not exactly double its
    /// predecessor (configuration defect, not user-recoverable).
    #[must_use]
    pub fn new(entries: Vec<LadderEntry>) -> Self {
        assert!(!entries.is_empty(), "Ladder must have at least one entry");
        assert!(entries[0].value > 0, "Ladder values must be positive");
        for pair in entries.windows(2) {
            assert!(
                pair[1].value == pair[0].value * 2,
                "Ladder values must double: {} does not follow {}",
                pair[1].value,
                pair[0].value
            );
        }
        Self { entries }
    }

    /// Create a ladder from bare values with a neutral style.
    ///
    /// Handy for tests and headless use where colors don't matter.
    #[must_use]
    pub fn from_values(values: &[u32]) -> Self {
        let neutral = TileStyle::new(Rgb(128, 128, 128));
        Self::new(
            values
                .iter()
                .map(|&value| LadderEntry::new(value, neutral))
                .collect(),
        )
    }

    /// The classic 2 through 2048 ladder with the traditional colors.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(vec![
            LadderEntry::new(
                2,
                TileStyle::new(Rgb(240, 229, 221)).with_text(Rgb(122, 111, 103)),
            ),
            LadderEntry::new(
                4,
                TileStyle::new(Rgb(238, 225, 203)).with_text(Rgb(124, 109, 102)),
            ),
            LadderEntry::new(8, TileStyle::new(Rgb(243, 176, 125))),
            LadderEntry::new(16, TileStyle::new(Rgb(236, 141, 90))),
            LadderEntry::new(32, TileStyle::new(Rgb(246, 124, 100))),
            LadderEntry::new(64, TileStyle::new(Rgb(233, 89, 62))),
            LadderEntry::new(128, TileStyle::new(Rgb(245, 215, 155))),
            LadderEntry::new(256, TileStyle::new(Rgb(242, 207, 87))),
            LadderEntry::new(512, TileStyle::new(Rgb(229, 192, 61))),
            LadderEntry::new(1024, TileStyle::new(Rgb(226, 186, 47))),
            LadderEntry::new(2048, TileStyle::new(Rgb(237, 196, 44))),
        ])
    }

    /// The smallest value - what freshly spawned tiles start at.
    #[must_use]
    pub fn base_value(&self) -> u32 {
        self.entries[0].value
    }

    /// The terminal (largest) value.
    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.entries[self.entries.len() - 1].value
    }

    /// Check whether a value appears in the ladder.
    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        self.index_of(value).is_some()
    }

    /// The value a merge of two `value` tiles produces.
    ///
    /// Returns `None` for the terminal entry: two tiles already at the
    /// ladder's maximum do not combine. Panics if `value` is not a ladder
    /// value at all - board tiles only ever hold ladder values, so that is
    /// a programmer error.
    #[must_use]
    pub fn next_value(&self, value: u32) -> Option<u32> {
        let index = self
            .index_of(value)
            .unwrap_or_else(|| panic!("{} is not a ladder value", value));
        self.entries.get(index + 1).map(|e| e.value)
    }

    /// Display metadata for a value, if it is a ladder value.
    #[must_use]
    pub fn style_for(&self, value: u32) -> Option<&TileStyle> {
        self.index_of(value).map(|i| &self.entries[i].style)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A ladder is never empty; this exists for completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = &LadderEntry> {
        self.entries.iter()
    }

    fn index_of(&self, value: u32) -> Option<usize> {
        self.entries.iter().position(|e| e.value == value)
    }
}
