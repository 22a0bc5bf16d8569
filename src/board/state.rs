//! Deck/hand/field lifecycle and the card-placement protocol.

use serde::{Deserialize, Serialize};

use super::card::{CardInstance, InstanceId};
use crate::catalog::{CardCatalog, TemplateId};
use crate::core::{ActionError, DuelRng};
use crate::energy::{parse_cost, CostMap, EnergyPool};
use crate::phase::{can_perform, ActionKind, Phase};

/// Number of field slots per seat.
pub const FIELD_SLOTS: usize = 5;

/// Cards dealt from the shuffled deck at duel start.
pub const INITIAL_HAND_SIZE: usize = 5;

/// One decklist line: a catalog card and how many copies to bring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecklistEntry {
    /// The catalog card.
    pub template: TemplateId,
    /// Number of copies.
    pub quantity: u32,
}

impl DecklistEntry {
    /// Create a decklist entry.
    #[must_use]
    pub const fn new(template: TemplateId, quantity: u32) -> Self {
        Self { template, quantity }
    }
}

/// Expand a decklist into distinct card instances.
///
/// Each copy gets its own `InstanceId`, allocated sequentially from
/// `first_instance`. Names and cost text are resolved from the catalog;
/// a template the catalog does not know is a reported error, since deck
/// data and catalog data come from different sources and can drift.
pub fn expand_decklist(
    entries: &[DecklistEntry],
    catalog: &CardCatalog,
    first_instance: u32,
) -> Result<Vec<CardInstance>, ActionError> {
    let mut instances = Vec::new();
    let mut next_id = first_instance;

    for entry in entries {
        let metadata = catalog
            .lookup(entry.template)
            .ok_or(ActionError::UnknownTemplate {
                template: entry.template,
            })?;

        for _ in 0..entry.quantity {
            instances.push(CardInstance::new(
                InstanceId::new(next_id),
                entry.template,
                metadata.name.clone(),
                metadata.cost_spec.clone(),
            ));
            next_id += 1;
        }
    }

    Ok(instances)
}

/// One seat's deck, hand, and field.
///
/// All mutation goes through `draw` and `place_on_field`; there is no
/// other way to move a card. Both operations are atomic: a rejected
/// call leaves the board (and the energy pool) untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// Face-down deck; the top of the deck is the end of the vec.
    deck: Vec<CardInstance>,
    /// Hand, in draw order.
    hand: Vec<CardInstance>,
    /// Field slots, each holding at most one card.
    field: [Option<CardInstance>; FIELD_SLOTS],
    /// Total copies this seat brought; fixed for the whole duel.
    initial_deck_size: usize,
}

impl BoardState {
    /// Shuffle the expanded instances and deal the opening hand.
    ///
    /// The shuffle uses the injected RNG so duels are reproducible from
    /// a seed. `hand_size` is clamped to the number of instances.
    #[must_use]
    pub fn initialize(
        mut instances: Vec<CardInstance>,
        hand_size: usize,
        rng: &mut DuelRng,
    ) -> Self {
        let initial_deck_size = instances.len();
        rng.shuffle(&mut instances);

        let mut hand = Vec::with_capacity(hand_size);
        for _ in 0..hand_size.min(initial_deck_size) {
            // Top of deck is the end of the vec, so dealing pops.
            if let Some(card) = instances.pop() {
                hand.push(card);
            }
        }

        let board = Self {
            deck: instances,
            hand,
            field: [None, None, None, None, None],
            initial_deck_size,
        };
        debug_assert!(board.is_conserved());
        board
    }

    /// Move the top card of the deck into the hand.
    ///
    /// Returns a reference to the drawn card, or `DeckEmpty` — a
    /// reported, non-fatal outcome.
    pub fn draw(&mut self) -> Result<&CardInstance, ActionError> {
        let card = self.deck.pop().ok_or(ActionError::DeckEmpty)?;
        self.hand.push(card);
        debug_assert!(self.is_conserved());
        Ok(self.hand.last().expect("card was just pushed"))
    }

    /// Place a card from hand into a field slot, paying its cost.
    ///
    /// Validation order (first failure wins):
    /// 1. `SlotOccupied` — the slot already holds a card
    /// 2. `WrongPhase` — placement is only legal in main/battle
    /// 3. `NotYourTurn` — the board's owner does not own the turn
    /// 4. `UnknownInstance` — the card is not in this hand
    /// 5. `InsufficientEnergy` — the pool cannot cover the cost
    ///
    /// On success the card moves and the cost is paid as one atomic
    /// step; on any rejection nothing changes. Returns the paid cost.
    ///
    /// An out-of-range slot index is an implementation defect in the
    /// caller, not a game outcome, and panics.
    pub fn place_on_field(
        &mut self,
        card: InstanceId,
        slot: usize,
        energy: &mut EnergyPool,
        phase: Phase,
        is_owner_turn: bool,
    ) -> Result<CostMap, ActionError> {
        assert!(slot < FIELD_SLOTS, "field slot {slot} out of range");

        if self.field[slot].is_some() {
            return Err(ActionError::SlotOccupied { slot });
        }
        if !can_perform(phase, ActionKind::PlayCard) {
            return Err(ActionError::WrongPhase { phase });
        }
        if !is_owner_turn {
            return Err(ActionError::NotYourTurn);
        }

        let index = self
            .hand
            .iter()
            .position(|c| c.instance == card)
            .ok_or(ActionError::UnknownInstance { card })?;

        let cost = parse_cost(&self.hand[index].cost_spec);
        energy
            .pay(&cost)
            .map_err(|missing| ActionError::InsufficientEnergy { missing })?;

        // All checks passed and the cost is paid; the moves below
        // cannot fail, so the whole operation observes as atomic.
        let card = self.hand.remove(index);
        self.field[slot] = Some(card);
        debug_assert!(self.is_conserved());
        Ok(cost)
    }

    /// The deck, bottom first (the top is the last element).
    #[must_use]
    pub fn deck(&self) -> &[CardInstance] {
        &self.deck
    }

    /// The hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[CardInstance] {
        &self.hand
    }

    /// All field slots.
    #[must_use]
    pub fn field(&self) -> &[Option<CardInstance>; FIELD_SLOTS] {
        &self.field
    }

    /// The card in a field slot, if any.
    #[must_use]
    pub fn slot(&self, slot: usize) -> Option<&CardInstance> {
        assert!(slot < FIELD_SLOTS, "field slot {slot} out of range");
        self.field[slot].as_ref()
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Number of occupied field slots.
    #[must_use]
    pub fn occupied_slots(&self) -> usize {
        self.field.iter().filter(|s| s.is_some()).count()
    }

    /// Total copies this seat brought to the duel.
    #[must_use]
    pub fn initial_deck_size(&self) -> usize {
        self.initial_deck_size
    }

    /// Find a card in the hand by instance ID.
    #[must_use]
    pub fn hand_card(&self, card: InstanceId) -> Option<&CardInstance> {
        self.hand.iter().find(|c| c.instance == card)
    }

    /// Conservation check: no instance created or destroyed, only
    /// relocated. A violation is an implementation defect.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        self.deck.len() + self.hand.len() + self.occupied_slots() == self.initial_deck_size
    }
}
