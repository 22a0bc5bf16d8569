//! The duel log: structured events with human-readable text.
//!
//! Every action appends zero or more [`LogEntry`] values to an ordered,
//! append-only stream. The presentation layer renders the entries; the
//! engine itself never reads them back.

use serde::{Deserialize, Serialize};

use super::action::ActionError;
use super::seat::Seat;
use crate::board::InstanceId;
use crate::energy::{CostMap, EnergyColor};
use crate::life::{GameOutcome, LifeEventKind};
use crate::phase::Phase;

/// One state-transition event.
///
/// Carries enough structure for a UI to react (sounds, animation) and
/// renders to a battle-log line via `Display`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelEvent {
    /// A seat's board was initialized at duel start.
    DuelStarted {
        /// The initialized seat.
        seat: Seat,
        /// Cards left in the deck after the opening hand was dealt.
        deck_size: usize,
        /// Opening hand size.
        hand_size: usize,
        /// Starting life.
        life: u32,
    },
    /// The phase tracker advanced.
    PhaseChanged {
        /// The phase entered.
        phase: Phase,
    },
    /// A card moved from deck to hand.
    CardDrawn {
        /// The drawing seat.
        seat: Seat,
        /// The drawn card.
        card: InstanceId,
        /// The drawn card's name.
        name: String,
        /// Cards left in the deck.
        remaining: usize,
    },
    /// A card moved from hand to a field slot and its cost was paid.
    CardPlaced {
        /// The acting seat.
        seat: Seat,
        /// The placed card.
        card: InstanceId,
        /// The placed card's name.
        name: String,
        /// Target slot, 0-based.
        slot: usize,
        /// The cost that was paid.
        cost: CostMap,
    },
    /// A card's cost text had no recognizable tokens; it was treated as
    /// free. Logged for visibility into messy catalog data.
    UnreadableCost {
        /// The card whose cost was unreadable.
        card: InstanceId,
        /// The raw cost text.
        raw: String,
    },
    /// A seat gained energy of one color.
    EnergyGained {
        /// The receiving seat.
        seat: Seat,
        /// The granted color.
        color: EnergyColor,
        /// Amount requested.
        amount: u8,
        /// The color's counter after the (possibly clamped) grant.
        total: u8,
    },
    /// Turn-start energy was rolled and granted.
    TurnEnergyGranted {
        /// The receiving seat.
        seat: Seat,
        /// Granted amounts per color.
        granted: CostMap,
    },
    /// A seat's life total changed.
    LifeChanged {
        /// The affected seat.
        seat: Seat,
        /// Damage or heal.
        kind: LifeEventKind,
        /// The applied (clamped) delta.
        applied: u32,
        /// The seat's life after the change.
        current: u32,
    },
    /// The turn passed to the other seat.
    TurnEnded {
        /// The new turn number.
        turn: u32,
        /// The new turn owner.
        owner: Seat,
    },
    /// The duel reached its terminal outcome.
    DuelEnded {
        /// The outcome.
        outcome: GameOutcome,
    },
    /// An action was rejected; state is unchanged.
    ActionRejected {
        /// Why the action was rejected.
        error: ActionError,
    },
}

impl std::fmt::Display for DuelEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuelEvent::DuelStarted {
                seat,
                deck_size,
                hand_size,
                life,
            } => write!(
                f,
                "{seat} ready: {deck_size} cards in deck, {hand_size} in hand, {life} life"
            ),
            DuelEvent::PhaseChanged { phase } => write!(f, "entered the {phase}"),
            DuelEvent::CardDrawn {
                seat,
                name,
                remaining,
                ..
            } => write!(f, "{seat} drew {name} ({remaining} left in deck)"),
            DuelEvent::CardPlaced {
                seat,
                name,
                slot,
                cost,
                ..
            } => write!(f, "{seat} placed {name} in slot {} for {cost}", slot + 1),
            DuelEvent::UnreadableCost { raw, .. } => {
                write!(f, "unreadable cost \"{raw}\"; treating card as free")
            }
            DuelEvent::EnergyGained {
                seat,
                color,
                amount,
                total,
            } => write!(f, "{seat} gained {amount} {color} energy ({total} {color} now)"),
            DuelEvent::TurnEnergyGranted { seat, granted } => {
                write!(f, "{seat} gains turn energy: {granted}")
            }
            DuelEvent::LifeChanged {
                seat,
                kind,
                applied,
                current,
            } => match kind {
                LifeEventKind::Damage => {
                    write!(f, "{seat} took {applied} damage ({current} life left)")
                }
                LifeEventKind::Heal => {
                    write!(f, "{seat} healed {applied} ({current} life now)")
                }
            },
            DuelEvent::TurnEnded { turn, owner } => write!(f, "turn {turn}: {owner}'s turn"),
            DuelEvent::DuelEnded { outcome } => f.write_str(&outcome.message()),
            DuelEvent::ActionRejected { error } => write!(f, "action rejected: {error}"),
        }
    }
}

/// One entry in the append-only duel log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Turn number when the event occurred.
    pub turn: u32,
    /// Phase when the event occurred.
    pub phase: Phase,
    /// The event.
    pub event: DuelEvent,
}

impl LogEntry {
    /// Create a new log entry.
    #[must_use]
    pub fn new(turn: u32, phase: Phase, event: DuelEvent) -> Self {
        Self { turn, phase, event }
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[turn {}, {}] {}", self.turn, self.phase, self.event)
    }
}
