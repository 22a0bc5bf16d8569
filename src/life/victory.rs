//! Victory evaluation from both seats' life totals.

use serde::{Deserialize, Serialize};

use super::tracker::LifeTracker;
use crate::core::{Seat, SeatMap};

/// Why a duel ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VictoryReason {
    /// The losing seat's life reached zero.
    ///
    /// Deck-out and special victory conditions are not implemented.
    LifeDepleted,
}

/// Terminal result of a duel. Once produced it never changes, and the
/// engine rejects all further mutating actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// The winning seat.
    pub winner: Seat,
    /// Why the duel ended.
    pub reason: VictoryReason,
}

impl GameOutcome {
    /// Human-readable outcome line for the log.
    #[must_use]
    pub fn message(&self) -> String {
        match self.reason {
            VictoryReason::LifeDepleted => format!(
                "{} life reached zero; {} wins",
                self.winner.opposite(),
                self.winner
            ),
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// Derive the duel outcome, or `None` while both seats are above zero.
///
/// Precedence: the player seat's depletion is checked before the
/// opponent's, so if both totals hit zero in the same action the
/// opponent wins. This ordering is deliberate and kept in one place so
/// a product decision to reverse it is a one-line change.
///
/// ```
/// use duel_engine::core::{Seat, SeatMap};
/// use duel_engine::life::{evaluate, LifeTracker};
///
/// let mut life: SeatMap<LifeTracker> = SeatMap::new(|_| LifeTracker::new(20));
/// assert!(evaluate(&life).is_none());
///
/// life[Seat::Opponent].damage(20);
/// assert_eq!(evaluate(&life).unwrap().winner, Seat::Player);
/// ```
#[must_use]
pub fn evaluate(life: &SeatMap<LifeTracker>) -> Option<GameOutcome> {
    if life[Seat::Player].is_depleted() {
        return Some(GameOutcome {
            winner: Seat::Opponent,
            reason: VictoryReason::LifeDepleted,
        });
    }

    if life[Seat::Opponent].is_depleted() {
        return Some(GameOutcome {
            winner: Seat::Player,
            reason: VictoryReason::LifeDepleted,
        });
    }

    None
}
