//! Settlement tracking.
//!
//! The logical board mutates synchronously at move-issue time, but each
//! slide/merge also plays out visually over several ticks. The tracker
//! counts those in-flight transitions and gates input: while any are
//! outstanding the board is `Busy` and new intents are dropped (never
//! queued). The `Busy -> Settled` edge is the trigger point for the
//! post-move spawn and terminal check.

use serde::{Deserialize, Serialize};

/// Whether the board is accepting input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementPhase {
    /// No outstanding transitions; input is accepted.
    Settled,
    /// Transitions in flight; input is dropped.
    Busy,
}

/// Counter of in-flight slide/merge transitions.
///
/// ## Example
///
/// ```
/// use merge_grid::settle::{SettlementPhase, SettlementTracker};
///
/// let mut tracker = SettlementTracker::new();
/// assert_eq!(tracker.phase(), SettlementPhase::Settled);
///
/// tracker.begin(2);
/// assert_eq!(tracker.phase(), SettlementPhase::Busy);
///
/// assert!(!tracker.complete()); // one still outstanding
/// assert!(tracker.complete()); // settled - spawn + terminal check now
/// ```
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct SettlementTracker {
    outstanding: u32,
}

impl SettlementTracker {
    /// Create a settled tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SettlementPhase {
        if self.outstanding == 0 {
            SettlementPhase::Settled
        } else {
            SettlementPhase::Busy
        }
    }

    /// Check whether the board is settled.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.outstanding == 0
    }

    /// Number of outstanding transitions.
    #[must_use]
    pub fn outstanding(&self) -> u32 {
        self.outstanding
    }

    /// Register the transitions of a newly issued move.
    ///
    /// Panics if called while `Busy` (input gating failed upstream) or
    /// with zero transitions (a no-op move must not leave `Settled`).
    pub fn begin(&mut self, transitions: u32) {
        assert!(
            self.outstanding == 0,
            "Move issued while {} transitions still outstanding",
            self.outstanding
        );
        assert!(transitions > 0, "A move with no effects cannot begin settling");
        self.outstanding = transitions;
    }

    /// Report one transition's visual completion.
    ///
    /// Returns `true` exactly when this completion settles the board.
    /// Panics if nothing is outstanding (a double completion).
    pub fn complete(&mut self) -> bool {
        assert!(
            self.outstanding > 0,
            "Transition completed while none were outstanding"
        );
        self.outstanding -= 1;
        self.outstanding == 0
    }
}
