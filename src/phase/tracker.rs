//! Cyclic phase tracker.
//!
//! Tracks the current phase within a turn and the sequence of phases
//! entered since the turn began. The tracker has no terminal state; it
//! cycles until `reset()` when a turn ends and ownership passes.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::{can_perform, ActionKind, Phase};

/// Tracks the current phase and the phases entered this turn.
///
/// ## Example
///
/// ```
/// use duel_engine::phase::{Phase, PhaseTracker};
///
/// let mut phases = PhaseTracker::new();
/// assert_eq!(phases.current(), Phase::Draw);
///
/// assert_eq!(phases.advance(), Phase::Main);
/// assert_eq!(phases.current(), Phase::Main);
///
/// phases.reset();
/// assert_eq!(phases.current(), Phase::Draw);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTracker {
    current: Phase,
    /// Phases entered since the turn began, oldest first.
    history: Vector<Phase>,
}

impl PhaseTracker {
    /// Create a tracker positioned at the draw phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current phase.
    #[must_use]
    pub fn current(&self) -> Phase {
        self.current
    }

    /// Move to the next phase in the fixed cycle and return it.
    pub fn advance(&mut self) -> Phase {
        self.current = self.current.next();
        self.history.push_back(self.current);
        self.current
    }

    /// Force the tracker back to the draw phase and clear the history.
    ///
    /// Called when a turn ends and ownership passes.
    pub fn reset(&mut self) {
        self.current = Phase::Draw;
        self.history.clear();
    }

    /// Check whether an action kind is legal in the current phase.
    #[must_use]
    pub fn permits(&self, kind: ActionKind) -> bool {
        can_perform(self.current, kind)
    }

    /// Phases entered since the turn began, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Phase> {
        &self.history
    }
}
