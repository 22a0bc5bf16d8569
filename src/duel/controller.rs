//! The duel controller and its builder.
//!
//! `Duel` is the single entry point the presentation layer talks to.
//! It owns the current `DuelState`, routes every action through the
//! pure step function, and swaps in the successor state. Observers read
//! `state()` (or clone it — clones are cheap); all mutation goes
//! through the action methods.

use im::Vector;

use super::state::{ActionReport, DuelState, TurnState};
use crate::board::{expand_decklist, BoardState, DecklistEntry, InstanceId, INITIAL_HAND_SIZE};
use crate::catalog::CardCatalog;
use crate::core::{Action, ActionError, DuelRng, LogEntry, Seat, SeatMap};
use crate::energy::{EnergyColor, EnergyPool, DEFAULT_ENERGY_CAP};
use crate::life::{GameOutcome, LifeTracker, DEFAULT_STARTING_LIFE};
use crate::phase::Phase;

/// One duel from initialization to outcome.
///
/// ## Example
///
/// ```
/// use duel_engine::board::DecklistEntry;
/// use duel_engine::catalog::{CardCatalog, CardMetadata, TemplateId};
/// use duel_engine::core::Seat;
/// use duel_engine::duel::Duel;
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardMetadata::new(TemplateId::new(1), "Stray Token"));
///
/// let deck = vec![DecklistEntry::new(TemplateId::new(1), 10)];
/// let mut duel = Duel::builder()
///     .build(&catalog, &deck, &deck, 42)
///     .unwrap();
///
/// let report = duel.draw_card(Seat::Player);
/// assert!(report.is_ok());
/// assert_eq!(duel.state().board(Seat::Player).hand_size(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct Duel {
    state: DuelState,
}

impl Duel {
    /// Start configuring a duel.
    #[must_use]
    pub fn builder() -> DuelBuilder {
        DuelBuilder::default()
    }

    /// Immutable snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> &DuelState {
        &self.state
    }

    /// Current turn owner and number.
    #[must_use]
    pub fn turn(&self) -> TurnState {
        self.state.turn()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// The terminal outcome, once the duel has one.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }

    /// The append-only duel log, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<LogEntry> {
        self.state.log()
    }

    fn step(&mut self, action: Action) -> ActionReport {
        let (next, report) = self.state.apply(&action);
        self.state = next;
        report
    }

    /// Move to the next phase in the fixed cycle.
    pub fn advance_phase(&mut self) -> ActionReport {
        self.step(Action::AdvancePhase)
    }

    /// Draw the top card of a seat's deck into its hand.
    pub fn draw_card(&mut self, seat: Seat) -> ActionReport {
        self.step(Action::DrawCard { seat })
    }

    /// Place a card from a seat's hand into a field slot.
    pub fn play_card(&mut self, seat: Seat, card: InstanceId, slot: usize) -> ActionReport {
        self.step(Action::PlayCard { seat, card, slot })
    }

    /// End the current turn; only legal from the end phase.
    pub fn end_turn(&mut self) -> ActionReport {
        self.step(Action::EndTurn)
    }

    /// Grant a seat energy of one color.
    pub fn add_energy(&mut self, seat: Seat, color: EnergyColor, amount: u8) -> ActionReport {
        self.step(Action::AddEnergy {
            seat,
            color,
            amount,
        })
    }

    /// Externally-triggered damage hook.
    pub fn apply_damage(&mut self, seat: Seat, amount: u32) -> ActionReport {
        self.step(Action::ApplyDamage { seat, amount })
    }

    /// Externally-triggered heal hook.
    pub fn apply_heal(&mut self, seat: Seat, amount: u32) -> ActionReport {
        self.step(Action::ApplyHeal { seat, amount })
    }

    /// Serialize the full duel state, including the RNG position, so a
    /// session can be suspended and resumed.
    pub fn snapshot(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(&self.state)
    }

    /// Restore a duel from a snapshot.
    pub fn restore(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes).map(|state| Self { state })
    }
}

/// Configures and builds a [`Duel`].
///
/// Defaults mirror the original game client: 20 starting life, an
/// opening hand of 5, a per-color energy cap of 10, and the player
/// seat acting first.
#[derive(Clone, Copy, Debug)]
pub struct DuelBuilder {
    starting_life: u32,
    initial_hand_size: usize,
    energy_cap: u8,
    starting_seat: Seat,
}

impl Default for DuelBuilder {
    fn default() -> Self {
        Self {
            starting_life: DEFAULT_STARTING_LIFE,
            initial_hand_size: INITIAL_HAND_SIZE,
            energy_cap: DEFAULT_ENERGY_CAP,
            starting_seat: Seat::Player,
        }
    }
}

impl DuelBuilder {
    /// Create a builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both seats' starting (and maximum) life.
    #[must_use]
    pub fn starting_life(mut self, life: u32) -> Self {
        self.starting_life = life;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn initial_hand_size(mut self, size: usize) -> Self {
        self.initial_hand_size = size;
        self
    }

    /// Set the per-color energy cap.
    #[must_use]
    pub fn energy_cap(mut self, cap: u8) -> Self {
        self.energy_cap = cap;
        self
    }

    /// Set which seat takes the first turn.
    #[must_use]
    pub fn starting_seat(mut self, seat: Seat) -> Self {
        self.starting_seat = seat;
        self
    }

    /// Build the duel from two decklists.
    ///
    /// Decklist templates are resolved against the catalog; an unknown
    /// template is a reported error. The seed drives both shuffles and
    /// all turn-energy rolls, so the same inputs rebuild the same duel.
    pub fn build(
        self,
        catalog: &CardCatalog,
        player_deck: &[DecklistEntry],
        opponent_deck: &[DecklistEntry],
        seed: u64,
    ) -> Result<Duel, ActionError> {
        let mut rng = DuelRng::new(seed);

        let player_instances = expand_decklist(player_deck, catalog, 0)?;
        let opponent_first = player_instances.len() as u32;
        let opponent_instances = expand_decklist(opponent_deck, catalog, opponent_first)?;

        let player_board =
            BoardState::initialize(player_instances, self.initial_hand_size, &mut rng);
        let opponent_board =
            BoardState::initialize(opponent_instances, self.initial_hand_size, &mut rng);

        let state = DuelState::new(
            SeatMap::from_parts(player_board, opponent_board),
            SeatMap::new(|_| EnergyPool::with_cap(self.energy_cap)),
            SeatMap::new(|_| LifeTracker::new(self.starting_life)),
            rng,
            self.starting_seat,
        );

        Ok(Duel { state })
    }
}
