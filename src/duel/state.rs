//! The duel state value and its pure step function.
//!
//! `DuelState` is one value holding everything a duel is: the turn and
//! phase trackers, both seats' boards, energy pools and life totals,
//! the RNG, the log, and the outcome once there is one. Applying an
//! action never mutates in place; it produces a successor state plus
//! the events and result of the action, so replay, undo, and
//! property testing fall out of the design. Cloning is cheap: the
//! log rides on a persistent vector and the rest is small.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{BoardState, InstanceId};
use crate::core::{Action, ActionError, DuelEvent, DuelRng, LogEntry, Seat, SeatMap};
use crate::energy::{parse_cost, turn_energy_amount, CostMap, EnergyColor, EnergyPool};
use crate::life::{evaluate, GameOutcome, LifeEventKind, LifeTracker};
use crate::phase::{ActionKind, Phase, PhaseTracker};

/// Whose turn it is and how many rounds have begun.
///
/// The number increments only when ownership returns to the duel's
/// starting seat, i.e. once per full round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// The seat currently allowed to act.
    pub owner: Seat,
    /// Turn number, starting at 1.
    pub number: u32,
}

/// What applying one action produced: its events, and success or a
/// typed rejection. The same events are also appended to the log.
#[derive(Clone, Debug)]
pub struct ActionReport {
    /// Events the action emitted, in order.
    pub events: Vec<DuelEvent>,
    /// Success, or why the action was rejected.
    pub result: Result<(), ActionError>,
}

impl ActionReport {
    /// True if the action was accepted.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Complete state of one duel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DuelState {
    turn: TurnState,
    starting_seat: Seat,
    phases: PhaseTracker,
    boards: SeatMap<BoardState>,
    energy: SeatMap<EnergyPool>,
    life: SeatMap<LifeTracker>,
    rng: DuelRng,
    outcome: Option<GameOutcome>,
    log: Vector<LogEntry>,
}

impl DuelState {
    /// Assemble the initial state of a duel.
    ///
    /// Emits the opening log entries and grants the starting seat its
    /// first-turn energy. Called by `DuelBuilder`.
    pub(crate) fn new(
        boards: SeatMap<BoardState>,
        energy: SeatMap<EnergyPool>,
        life: SeatMap<LifeTracker>,
        rng: DuelRng,
        starting_seat: Seat,
    ) -> Self {
        let mut state = Self {
            turn: TurnState {
                owner: starting_seat,
                number: 1,
            },
            starting_seat,
            phases: PhaseTracker::new(),
            boards,
            energy,
            life,
            rng,
            outcome: None,
            log: Vector::new(),
        };

        let mut events = Vec::new();
        for seat in Seat::ALL {
            events.push(DuelEvent::DuelStarted {
                seat,
                deck_size: state.boards[seat].deck_size(),
                hand_size: state.boards[seat].hand_size(),
                life: state.life[seat].current(),
            });
        }
        state.grant_turn_energy(starting_seat, &mut events);
        state.append_to_log(&events);

        state
    }

    // === Queries ===

    /// Current turn owner and number.
    #[must_use]
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// The seat that took the first turn of the duel.
    #[must_use]
    pub fn starting_seat(&self) -> Seat {
        self.starting_seat
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phases.current()
    }

    /// Phases entered since the current turn began.
    #[must_use]
    pub fn phase_history(&self) -> &Vector<Phase> {
        self.phases.history()
    }

    /// A seat's board.
    #[must_use]
    pub fn board(&self, seat: Seat) -> &BoardState {
        &self.boards[seat]
    }

    /// A seat's energy pool.
    #[must_use]
    pub fn energy(&self, seat: Seat) -> &EnergyPool {
        &self.energy[seat]
    }

    /// A seat's life total.
    #[must_use]
    pub fn life(&self, seat: Seat) -> &LifeTracker {
        &self.life[seat]
    }

    /// The terminal outcome, once the duel has one.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// The append-only duel log, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<LogEntry> {
        &self.log
    }

    // === The step function ===

    /// Apply one action, producing the successor state and a report.
    ///
    /// `self` is never touched. On rejection the successor differs from
    /// `self` only by the rejection log entry; no game state changes.
    #[must_use]
    pub fn apply(&self, action: &Action) -> (DuelState, ActionReport) {
        let mut next = self.clone();
        let mut events = Vec::new();
        let result = next.dispatch(action, &mut events);

        if let Err(error) = &result {
            events.push(DuelEvent::ActionRejected {
                error: error.clone(),
            });
        }
        next.append_to_log(&events);

        debug_assert!(next.boards[Seat::Player].is_conserved());
        debug_assert!(next.boards[Seat::Opponent].is_conserved());

        (next, ActionReport { events, result })
    }

    fn append_to_log(&mut self, events: &[DuelEvent]) {
        for event in events {
            self.log.push_back(LogEntry::new(
                self.turn.number,
                self.phases.current(),
                event.clone(),
            ));
        }
    }

    fn dispatch(&mut self, action: &Action, events: &mut Vec<DuelEvent>) -> Result<(), ActionError> {
        // Terminal outcome freezes the duel: every action mutates, so
        // every action is rejected from here on.
        if self.outcome.is_some() {
            return Err(ActionError::GameOver);
        }

        match *action {
            Action::AdvancePhase => {
                let phase = self.phases.advance();
                events.push(DuelEvent::PhaseChanged { phase });
                Ok(())
            }
            Action::DrawCard { seat } => self.draw_card(seat, events),
            Action::PlayCard { seat, card, slot } => self.play_card(seat, card, slot, events),
            Action::EndTurn => self.end_turn(events),
            Action::AddEnergy {
                seat,
                color,
                amount,
            } => {
                let total = self.energy[seat].add(color, amount);
                events.push(DuelEvent::EnergyGained {
                    seat,
                    color,
                    amount,
                    total,
                });
                Ok(())
            }
            Action::ApplyDamage { seat, amount } => {
                let applied = self.life[seat].damage(amount);
                events.push(DuelEvent::LifeChanged {
                    seat,
                    kind: LifeEventKind::Damage,
                    applied,
                    current: self.life[seat].current(),
                });
                self.check_victory(events);
                Ok(())
            }
            Action::ApplyHeal { seat, amount } => {
                let applied = self.life[seat].heal(amount);
                events.push(DuelEvent::LifeChanged {
                    seat,
                    kind: LifeEventKind::Heal,
                    applied,
                    current: self.life[seat].current(),
                });
                self.check_victory(events);
                Ok(())
            }
        }
    }

    fn draw_card(&mut self, seat: Seat, events: &mut Vec<DuelEvent>) -> Result<(), ActionError> {
        let phase = self.phases.current();
        if !self.phases.permits(ActionKind::Draw) {
            return Err(ActionError::WrongPhase { phase });
        }
        if self.turn.owner != seat {
            return Err(ActionError::NotYourTurn);
        }

        let drawn = self.boards[seat].draw()?;
        let card = drawn.instance;
        let name = drawn.name.clone();
        events.push(DuelEvent::CardDrawn {
            seat,
            card,
            name,
            remaining: self.boards[seat].deck_size(),
        });
        Ok(())
    }

    fn play_card(
        &mut self,
        seat: Seat,
        card: InstanceId,
        slot: usize,
        events: &mut Vec<DuelEvent>,
    ) -> Result<(), ActionError> {
        let phase = self.phases.current();
        let is_owner_turn = self.turn.owner == seat;

        // Spot unreadable cost text while the card is still in hand.
        let unreadable_raw = self.boards[seat].hand_card(card).and_then(|c| {
            let has_text = !c.cost_spec.trim().is_empty();
            (has_text && parse_cost(&c.cost_spec).is_free()).then(|| c.cost_spec.clone())
        });

        let board = self.boards.get_mut(seat);
        let energy = self.energy.get_mut(seat);
        let cost = board.place_on_field(card, slot, energy, phase, is_owner_turn)?;

        if let Some(raw) = unreadable_raw {
            events.push(DuelEvent::UnreadableCost { card, raw });
        }
        let name = board
            .slot(slot)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        events.push(DuelEvent::CardPlaced {
            seat,
            card,
            name,
            slot,
            cost,
        });
        Ok(())
    }

    fn end_turn(&mut self, events: &mut Vec<DuelEvent>) -> Result<(), ActionError> {
        let phase = self.phases.current();
        if phase != Phase::End {
            return Err(ActionError::WrongPhase { phase });
        }

        let new_owner = self.turn.owner.opposite();
        if new_owner == self.starting_seat {
            self.turn.number += 1;
        }
        self.turn.owner = new_owner;
        self.phases.reset();

        events.push(DuelEvent::TurnEnded {
            turn: self.turn.number,
            owner: new_owner,
        });
        self.grant_turn_energy(new_owner, events);
        Ok(())
    }

    /// Roll and grant turn-start energy: `min(turn_number, 5)` energy
    /// of seeded-random colors, each clamped by the pool cap.
    fn grant_turn_energy(&mut self, seat: Seat, events: &mut Vec<DuelEvent>) {
        let amount = turn_energy_amount(self.turn.number);
        let mut granted = CostMap::new();

        for _ in 0..amount {
            if let Some(&color) = self.rng.choose(&EnergyColor::ALL) {
                self.energy[seat].add(color, 1);
                granted.add(color, 1);
            }
        }

        if !granted.is_free() {
            events.push(DuelEvent::TurnEnergyGranted { seat, granted });
        }
    }

    fn check_victory(&mut self, events: &mut Vec<DuelEvent>) {
        if let Some(outcome) = evaluate(&self.life) {
            self.outcome = Some(outcome);
            events.push(DuelEvent::DuelEnded { outcome });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{expand_decklist, DecklistEntry};
    use crate::catalog::{CardCatalog, CardMetadata, TemplateId};

    fn catalog() -> CardCatalog {
        let mut catalog = CardCatalog::new();
        catalog.register(CardMetadata::new(TemplateId::new(1), "Stray Token"));
        catalog
    }

    fn small_state() -> DuelState {
        let catalog = catalog();
        let entries = [DecklistEntry::new(TemplateId::new(1), 10)];
        let mut rng = DuelRng::new(42);
        let player = BoardState::initialize(expand_decklist(&entries, &catalog, 0).unwrap(), 5, &mut rng);
        let opponent =
            BoardState::initialize(expand_decklist(&entries, &catalog, 10).unwrap(), 5, &mut rng);

        DuelState::new(
            SeatMap::from_parts(player, opponent),
            SeatMap::new(|_| EnergyPool::new()),
            SeatMap::new(|_| LifeTracker::new(20)),
            rng,
            Seat::Player,
        )
    }

    #[test]
    fn test_apply_leaves_original_untouched() {
        let state = small_state();
        let before_log = state.log().len();

        let (next, report) = state.apply(&Action::DrawCard { seat: Seat::Player });

        assert!(report.is_ok());
        assert_eq!(state.log().len(), before_log);
        assert_eq!(state.board(Seat::Player).hand_size(), 5);
        assert_eq!(next.board(Seat::Player).hand_size(), 6);
    }

    #[test]
    fn test_rejection_changes_only_the_log() {
        let state = small_state();

        // Drawing out of phase: advance to main first.
        let (state, _) = state.apply(&Action::AdvancePhase);
        let (next, report) = state.apply(&Action::DrawCard { seat: Seat::Player });

        assert_eq!(
            report.result,
            Err(ActionError::WrongPhase { phase: Phase::Main })
        );
        assert_eq!(next.board(Seat::Player).hand_size(), 5);
        assert_eq!(next.board(Seat::Player).deck_size(), 5);
        assert_eq!(next.log().len(), state.log().len() + 1);
    }

    #[test]
    fn test_draw_requires_owner() {
        let state = small_state();
        let (_, report) = state.apply(&Action::DrawCard {
            seat: Seat::Opponent,
        });
        assert_eq!(report.result, Err(ActionError::NotYourTurn));
    }

    #[test]
    fn test_initial_state_grants_first_turn_energy() {
        let state = small_state();
        // Turn 1 grants exactly one energy to the starting seat.
        assert_eq!(state.energy(Seat::Player).total(), 1);
        assert_eq!(state.energy(Seat::Opponent).total(), 0);
    }

    #[test]
    fn test_end_turn_only_from_end_phase() {
        let state = small_state();
        let (next, report) = state.apply(&Action::EndTurn);

        assert_eq!(
            report.result,
            Err(ActionError::WrongPhase { phase: Phase::Draw })
        );
        assert_eq!(next.turn(), state.turn());
    }

    #[test]
    fn test_end_turn_swaps_owner_and_counts_rounds() {
        let mut state = small_state();
        assert_eq!(state.turn().number, 1);

        // Player's turn ends: same round.
        for _ in 0..3 {
            state = state.apply(&Action::AdvancePhase).0;
        }
        let (next, report) = state.apply(&Action::EndTurn);
        assert!(report.is_ok());
        assert_eq!(next.turn().owner, Seat::Opponent);
        assert_eq!(next.turn().number, 1);
        assert_eq!(next.phase(), Phase::Draw);

        // Opponent's turn ends: ownership returns to the starting
        // seat, so the round counter ticks.
        let mut state = next;
        for _ in 0..3 {
            state = state.apply(&Action::AdvancePhase).0;
        }
        let (next, _) = state.apply(&Action::EndTurn);
        assert_eq!(next.turn().owner, Seat::Player);
        assert_eq!(next.turn().number, 2);
    }

    #[test]
    fn test_end_turn_grants_energy_to_new_owner() {
        let mut state = small_state();
        for _ in 0..3 {
            state = state.apply(&Action::AdvancePhase).0;
        }
        let (next, report) = state.apply(&Action::EndTurn);

        assert!(report.is_ok());
        // Turn 1, opponent's first turn: one energy granted.
        assert_eq!(next.energy(Seat::Opponent).total(), 1);
        assert!(report
            .events
            .iter()
            .any(|e| matches!(e, DuelEvent::TurnEnergyGranted { seat: Seat::Opponent, .. })));
    }

    #[test]
    fn test_damage_sets_outcome_and_freezes() {
        let state = small_state();
        let (next, report) = state.apply(&Action::ApplyDamage {
            seat: Seat::Opponent,
            amount: 25,
        });

        assert!(report.is_ok());
        let outcome = next.outcome().unwrap();
        assert_eq!(outcome.winner, Seat::Player);
        assert!(report
            .events
            .iter()
            .any(|e| matches!(e, DuelEvent::DuelEnded { .. })));

        // Every further mutating action is rejected.
        let (frozen, report) = next.apply(&Action::AdvancePhase);
        assert_eq!(report.result, Err(ActionError::GameOver));
        assert_eq!(frozen.phase(), next.phase());
        assert_eq!(frozen.turn(), next.turn());

        let (_, report) = frozen.apply(&Action::ApplyHeal {
            seat: Seat::Opponent,
            amount: 5,
        });
        assert_eq!(report.result, Err(ActionError::GameOver));
    }

    #[test]
    fn test_heal_reevaluates_without_ending() {
        let state = small_state();
        let (next, report) = state.apply(&Action::ApplyHeal {
            seat: Seat::Player,
            amount: 5,
        });

        assert!(report.is_ok());
        assert!(next.outcome().is_none());
        // Already at max: applied delta is zero.
        assert!(matches!(
            report.events[0],
            DuelEvent::LifeChanged { applied: 0, .. }
        ));
    }

    #[test]
    fn test_add_energy_clamps_at_cap() {
        let state = small_state();
        let (next, report) = state.apply(&Action::AddEnergy {
            seat: Seat::Player,
            color: EnergyColor::Blue,
            amount: 200,
        });

        assert!(report.is_ok());
        assert_eq!(
            next.energy(Seat::Player).get(EnergyColor::Blue),
            next.energy(Seat::Player).cap()
        );
    }

    #[test]
    fn test_log_grows_monotonically() {
        let mut state = small_state();
        let mut last_len = state.log().len();

        for action in [
            Action::DrawCard { seat: Seat::Player },
            Action::AdvancePhase,
            Action::AdvancePhase,
            Action::AdvancePhase,
            Action::EndTurn,
        ] {
            state = state.apply(&action).0;
            assert!(state.log().len() > last_len);
            last_len = state.log().len();
        }
    }
}
