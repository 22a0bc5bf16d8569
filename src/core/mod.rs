//! Core engine types: seats, RNG, actions, and the duel log.
//!
//! These are the building blocks the domain modules share. Everything
//! here is serializable so a full duel state can be checkpointed.

pub mod action;
pub mod log;
pub mod rng;
pub mod seat;

pub use action::{Action, ActionError};
pub use log::{DuelEvent, LogEntry};
pub use rng::{DuelRng, DuelRngState};
pub use seat::{Seat, SeatMap};
