//! Actions and their typed rejections.
//!
//! Every mutation of a duel flows through one of the [`Action`] verbs.
//! An action either completes synchronously or is rejected with an
//! [`ActionError`]; rejections are ordinary, recoverable outcomes (the
//! UI reports them), never unexpected faults, and a rejected action
//! leaves the game state untouched.

use serde::{Deserialize, Serialize};

use super::seat::Seat;
use crate::board::InstanceId;
use crate::catalog::TemplateId;
use crate::energy::{CostMap, EnergyColor};
use crate::phase::Phase;

/// One player action, the engine's only input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Move to the next phase in the fixed cycle.
    AdvancePhase,
    /// Draw the top card of a seat's deck into its hand.
    DrawCard {
        /// The drawing seat.
        seat: Seat,
    },
    /// Place a card from hand into a field slot, paying its cost.
    PlayCard {
        /// The acting seat.
        seat: Seat,
        /// The card to place (must be in the seat's hand).
        card: InstanceId,
        /// Target field slot, 0-based.
        slot: usize,
    },
    /// End the current turn; only legal from the end phase.
    EndTurn,
    /// Grant a seat energy of one color (clamped at the cap).
    AddEnergy {
        /// The receiving seat.
        seat: Seat,
        /// Color to grant.
        color: EnergyColor,
        /// Amount to grant.
        amount: u8,
    },
    /// Externally-triggered damage hook (e.g. battle resolution above
    /// this engine).
    ApplyDamage {
        /// The damaged seat.
        seat: Seat,
        /// Requested damage; the applied delta is clamped at zero life.
        amount: u32,
    },
    /// Externally-triggered heal hook.
    ApplyHeal {
        /// The healed seat.
        seat: Seat,
        /// Requested heal; the applied delta is clamped at max life.
        amount: u32,
    },
}

/// Typed rejection of an action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionError {
    /// Draw attempted with zero cards remaining.
    DeckEmpty,
    /// Placement target slot already holds a card.
    SlotOccupied {
        /// The occupied slot, 0-based.
        slot: usize,
    },
    /// The current phase does not permit this action.
    WrongPhase {
        /// The phase the duel was in.
        phase: Phase,
    },
    /// The acting seat does not own the current turn.
    NotYourTurn,
    /// The seat's energy pool cannot cover the card's cost.
    InsufficientEnergy {
        /// Per-color deficits.
        missing: CostMap,
    },
    /// A raw amount crossing the API boundary was not a valid quantity.
    InvalidAmount,
    /// A decklist entry names a template the catalog does not know.
    UnknownTemplate {
        /// The unresolved template.
        template: TemplateId,
    },
    /// The named card is not in the acting seat's hand.
    UnknownInstance {
        /// The missing card.
        card: InstanceId,
    },
    /// The duel has a terminal outcome; no further mutation is accepted.
    GameOver,
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionError::DeckEmpty => write!(f, "the deck is empty"),
            ActionError::SlotOccupied { slot } => {
                write!(f, "field slot {} is already occupied", slot + 1)
            }
            ActionError::WrongPhase { phase } => {
                write!(f, "not allowed during the {phase}")
            }
            ActionError::NotYourTurn => write!(f, "not your turn"),
            ActionError::InsufficientEnergy { missing } => {
                write!(f, "not enough energy (missing {missing})")
            }
            ActionError::InvalidAmount => write!(f, "invalid amount"),
            ActionError::UnknownTemplate { template } => {
                write!(f, "{template} is not in the catalog")
            }
            ActionError::UnknownInstance { card } => {
                write!(f, "card {card} is not in hand")
            }
            ActionError::GameOver => write!(f, "the duel is already over"),
        }
    }
}

impl std::error::Error for ActionError {}
