//! Turn phases and the action permission table.
//!
//! A turn cycles through four phases in a fixed order:
//! Draw → Main → Battle → End → Draw …
//!
//! Each phase gates which kinds of action are legal:
//!
//! | Phase  | draw | play card | attack |
//! |--------|------|-----------|--------|
//! | Draw   | yes  | no        | no     |
//! | Main   | no   | yes       | no     |
//! | Battle | no   | yes       | yes    |
//! | End    | no   | no        | no     |
//!
//! ## Key Types
//!
//! - `Phase`: The four-phase cycle
//! - `ActionKind`: Action categories the table gates
//! - `PhaseTracker`: Current phase plus history of entered phases

pub mod tracker;

pub use tracker::PhaseTracker;

use serde::{Deserialize, Serialize};

/// One of the four sub-states within a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Draw a card from the deck.
    #[default]
    Draw,
    /// Place cards on the field.
    Main,
    /// Place cards and attack.
    Battle,
    /// Wrap up; the only phase a turn may end from.
    End,
}

impl Phase {
    /// The fixed phase cycle, in order.
    pub const CYCLE: [Phase; 4] = [Phase::Draw, Phase::Main, Phase::Battle, Phase::End];

    /// The next phase in the cycle (wraps End → Draw).
    ///
    /// ```
    /// use duel_engine::phase::Phase;
    ///
    /// assert_eq!(Phase::Draw.next(), Phase::Main);
    /// assert_eq!(Phase::End.next(), Phase::Draw);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Phase::Draw => Phase::Main,
            Phase::Main => Phase::Battle,
            Phase::Battle => Phase::End,
            Phase::End => Phase::Draw,
        }
    }

    /// Human-readable phase name for log text.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Phase::Draw => "draw phase",
            Phase::Main => "main phase",
            Phase::Battle => "battle phase",
            Phase::End => "end phase",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Categories of player action gated by the permission table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Draw a card from the deck.
    Draw,
    /// Place a card from hand onto the field.
    PlayCard,
    /// Declare an attack with a field card.
    Attack,
}

/// Check whether an action kind is legal in a phase.
///
/// Pure lookup against the static permission table; no failure modes.
///
/// ```
/// use duel_engine::phase::{can_perform, ActionKind, Phase};
///
/// assert!(can_perform(Phase::Draw, ActionKind::Draw));
/// assert!(!can_perform(Phase::Main, ActionKind::Draw));
/// assert!(can_perform(Phase::Battle, ActionKind::Attack));
/// assert!(!can_perform(Phase::End, ActionKind::PlayCard));
/// ```
#[must_use]
pub const fn can_perform(phase: Phase, kind: ActionKind) -> bool {
    match (phase, kind) {
        (Phase::Draw, ActionKind::Draw) => true,
        (Phase::Main | Phase::Battle, ActionKind::PlayCard) => true,
        (Phase::Battle, ActionKind::Attack) => true,
        _ => false,
    }
}
