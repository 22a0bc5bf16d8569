//! Board state: deck, hand, and field per seat.
//!
//! A board owns every physical card copy a seat brought to the duel.
//! Cards only ever *relocate* between the deck, the hand, and the five
//! field slots; they are never created or destroyed mid-duel, so
//! `|deck| + |hand| + occupied slots` always equals the initial deck
//! size.
//!
//! ## Key Types
//!
//! - `InstanceId` / `CardInstance`: One physical card copy
//! - `DecklistEntry`: `{ template, quantity }` input from deck building
//! - `BoardState`: The three locations and their mutation protocol

pub mod card;
pub mod state;

pub use card::{CardInstance, InstanceId};
pub use state::{expand_decklist, BoardState, DecklistEntry, FIELD_SLOTS, INITIAL_HAND_SIZE};
