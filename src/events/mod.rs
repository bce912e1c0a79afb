//! Outbound events.
//!
//! The engine owns no rendering, scoring UI, or persistence; collaborators
//! observe it through a single ordered event queue that they drain each
//! tick. Effect notifications (for the presentation layer) and
//! score/terminal events (for UI and meta-game logic) share the queue so
//! consumers see one consistent order.

use serde::{Deserialize, Serialize};

use crate::moves::Effect;

/// Something collaborators need to know about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A board mutation to animate. The presentation layer must report
    /// each slide/merge back via `Game::transition_complete` exactly once
    /// (`Effect::needs_settlement`); spawns animate freely.
    Effect(Effect),

    /// A merge happened; `value` is the merged tile's new value. Emitted
    /// once per merge, for the caller's running score.
    ScoreIncreased { value: u32 },

    /// A merge reached the configured win threshold this round. The board
    /// does not freeze; play continues.
    Won { value: u32 },

    /// No legal moves remain.
    GameOver,
}

/// Ordered queue of pending events, drained by collaborators.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Remove and return all pending events, oldest first.
    pub fn drain(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if no events are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Peek at pending events without draining them.
    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.events
    }
}
