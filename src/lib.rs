//! # duel-engine
//!
//! The duel engine behind a browser card-battle game: a turn/phase
//! state machine, per-seat energy pools, life totals with victory
//! evaluation, and deck/hand/field board state, all driven through a
//! single action API.
//!
//! ## Design Principles
//!
//! 1. **One state value**: The whole duel (turn, phases, both seats'
//!    boards, energy, life, RNG, log) is a single cheap-to-clone
//!    `DuelState`. Applying an action is a pure step function
//!    `(state, action) → (successor, events, result)`, which makes
//!    replay, undo, and property testing straightforward.
//!
//! 2. **Typed rejections, never exceptions**: Every precondition
//!    failure (`DeckEmpty`, `SlotOccupied`, `WrongPhase`, …) comes back
//!    as an ordinary `ActionError` value, and a rejected action leaves
//!    the game state untouched. Only structural invariant violations —
//!    implementation defects — panic.
//!
//! 3. **Deterministic by construction**: The RNG is seeded through
//!    `DuelBuilder`, so shuffles and turn-energy rolls replay exactly,
//!    and a full duel (RNG position included) snapshots to bytes.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, actions, the duel log
//! - `phase`: The four-phase cycle and its permission table
//! - `energy`: Five-color pools, atomic payment, lenient cost parsing
//! - `life`: Clamped life totals and victory evaluation
//! - `board`: Deck/hand/field state and the placement protocol
//! - `catalog`: Card metadata lookup (consumed interface)
//! - `duel`: The state value, step function, controller, and builder

pub mod board;
pub mod catalog;
pub mod core;
pub mod duel;
pub mod energy;
pub mod life;
pub mod phase;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, DuelEvent, DuelRng, DuelRngState, LogEntry, Seat, SeatMap,
};

pub use crate::phase::{can_perform, ActionKind, Phase, PhaseTracker};

pub use crate::energy::{
    format_cost, parse_cost, CostMap, EnergyColor, EnergyPool, DEFAULT_ENERGY_CAP,
};

pub use crate::life::{
    evaluate, GameOutcome, LifeEvent, LifeEventKind, LifeStatus, LifeTracker, VictoryReason,
    DEFAULT_STARTING_LIFE,
};

pub use crate::board::{
    expand_decklist, BoardState, CardInstance, DecklistEntry, InstanceId, FIELD_SLOTS,
    INITIAL_HAND_SIZE,
};

pub use crate::catalog::{CardCatalog, CardMetadata, TemplateId};

pub use crate::duel::{ActionReport, Duel, DuelBuilder, DuelState, TurnState};
