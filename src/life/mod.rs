//! Life totals and victory evaluation.
//!
//! Each seat has a clamped life total; the duel ends when either seat's
//! total reaches zero. Victory precedence on simultaneous depletion is
//! explicit and lives in one place ([`evaluate`]).
//!
//! ## Key Types
//!
//! - `LifeTracker`: Clamped damage/heal with an applied-delta history
//! - `LifeStatus`: Presentation bands (high/medium/low/critical/dead)
//! - `GameOutcome` / `VictoryReason`: Terminal duel result
//! - `evaluate`: Outcome derivation from both seats' life

pub mod tracker;
pub mod victory;

pub use tracker::{LifeEvent, LifeEventKind, LifeStatus, LifeTracker, DEFAULT_STARTING_LIFE};
pub use victory::{evaluate, GameOutcome, VictoryReason};
