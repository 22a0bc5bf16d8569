//! Duel orchestration: the state value, the step function, and the
//! controller.
//!
//! The duel aggregate (turn, phases, both seats' boards, energy, life,
//! RNG, log, outcome) is one value. `DuelState::apply` is a pure step
//! function `(state, action) → (successor, events, result)`; [`Duel`]
//! owns the current value and exposes the action API the presentation
//! layer calls.
//!
//! ## Key Types
//!
//! - `DuelState` / `TurnState`: The versioned state value
//! - `ActionReport`: Events plus success-or-rejection for one action
//! - `Duel`: The controller; single entry point for all mutation
//! - `DuelBuilder`: Duel setup from decklists, catalog, and a seed

pub mod controller;
pub mod state;

pub use controller::{Duel, DuelBuilder};
pub use state::{ActionReport, DuelState, TurnState};
