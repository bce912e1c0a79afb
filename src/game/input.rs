//! The input seam.
//!
//! Platform input (keyboard, touch-drag) lives outside the engine.
//! Drivers implement `InputSource`; the game polls it at most once per
//! tick and not at all while transitions are in flight, so intents issued
//! during animation are simply lost, never buffered.

use std::collections::VecDeque;

use crate::core::Direction;

/// A source of direction intents, polled once per tick.
pub trait InputSource {
    /// The intent for this tick, if any.
    fn poll(&mut self) -> Option<Direction>;
}

/// A scripted input source for tests and headless drivers.
///
/// ## Example
///
/// ```
/// use merge_grid::core::Direction;
/// use merge_grid::game::{InputSource, QueuedInput};
///
/// let mut input = QueuedInput::new();
/// input.push(Direction::Left);
///
/// assert_eq!(input.poll(), Some(Direction::Left));
/// assert_eq!(input.poll(), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct QueuedInput {
    queue: VecDeque<Direction>,
}

impl QueuedInput {
    /// Create an empty input source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an intent.
    pub fn push(&mut self, direction: Direction) {
        self.queue.push_back(direction);
    }

    /// Number of queued intents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if no intents are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputSource for QueuedInput {
    fn poll(&mut self) -> Option<Direction> {
        self.queue.pop_front()
    }
}
