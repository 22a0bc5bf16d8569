//! Property-based tests for the duel engine.
//!
//! These verify the structural invariants under arbitrary inputs:
//! parser leniency, payment atomicity, and conservation of card
//! instances across random action sequences.

use proptest::prelude::*;

use duel_engine::board::{DecklistEntry, FIELD_SLOTS};
use duel_engine::catalog::{CardCatalog, CardMetadata, TemplateId};
use duel_engine::core::{Action, Seat};
use duel_engine::duel::Duel;
use duel_engine::energy::{parse_cost, CostMap, EnergyColor, EnergyPool};

fn catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();
    catalog.register(CardMetadata::new(TemplateId::new(1), "Stray Token"));
    catalog.register(CardMetadata::new(TemplateId::new(2), "Azure Drake").with_cost("青2"));
    catalog.register(CardMetadata::new(TemplateId::new(3), "Ember Imp").with_cost("赤"));
    catalog
}

/// Strategy for one action, with indices wide enough to hit both valid
/// and rejected cases.
fn action_strategy() -> impl Strategy<Value = Action> {
    let seat = prop_oneof![Just(Seat::Player), Just(Seat::Opponent)];
    let color = proptest::sample::select(EnergyColor::ALL.to_vec());

    prop_oneof![
        Just(Action::AdvancePhase),
        Just(Action::EndTurn),
        seat.clone().prop_map(|seat| Action::DrawCard { seat }),
        (seat.clone(), 0u32..40, 0..FIELD_SLOTS).prop_map(|(seat, id, slot)| Action::PlayCard {
            seat,
            card: duel_engine::board::InstanceId::new(id),
            slot,
        }),
        (seat.clone(), color, 0u8..5).prop_map(|(seat, color, amount)| Action::AddEnergy {
            seat,
            color,
            amount,
        }),
        (seat.clone(), 0u32..4).prop_map(|(seat, amount)| Action::ApplyDamage { seat, amount }),
        (seat, 0u32..4).prop_map(|(seat, amount)| Action::ApplyHeal { seat, amount }),
    ]
}

proptest! {
    /// The cost parser accepts any string without panicking, and a
    /// parsed amount never exceeds what the digits could express.
    #[test]
    fn prop_parse_cost_total_is_bounded(raw in ".{0,64}") {
        let cost = parse_cost(&raw);
        prop_assert!(cost.total() <= 64 * u32::from(u8::MAX));
    }

    /// Parsing is insensitive to surrounding noise: wrapping a cost in
    /// arbitrary non-token text parses to the same map.
    #[test]
    fn prop_parse_cost_ignores_noise(prefix in "[a-z ]{0,8}", suffix in "[a-z ]{0,8}") {
        let bare = parse_cost("青2赤");
        let wrapped = parse_cost(&format!("{prefix}青2赤{suffix}"));
        prop_assert_eq!(bare, wrapped);
    }

    /// Payment is all-or-nothing for arbitrary pools and costs.
    #[test]
    fn prop_pay_is_atomic(
        held in proptest::array::uniform5(0u8..=10),
        required in proptest::array::uniform5(0u8..=12),
    ) {
        let mut pool = EnergyPool::new();
        let mut cost = CostMap::new();
        for (i, color) in EnergyColor::ALL.into_iter().enumerate() {
            pool.add(color, held[i]);
            cost.add(color, required[i]);
        }

        let before = pool.clone();
        match pool.pay(&cost) {
            Ok(()) => {
                for color in EnergyColor::ALL {
                    prop_assert_eq!(pool.get(color), before.get(color) - cost.get(color));
                }
            }
            Err(missing) => {
                prop_assert_eq!(&pool, &before);
                prop_assert!(!missing.is_free());
                for color in EnergyColor::ALL {
                    prop_assert_eq!(
                        missing.get(color),
                        cost.get(color).saturating_sub(before.get(color))
                    );
                }
            }
        }
    }

    /// Conservation holds for every seat across arbitrary action
    /// sequences: cards are only relocated, never created or lost, and
    /// energy and life stay within their bounds.
    #[test]
    fn prop_invariants_hold_under_random_actions(
        seed in any::<u64>(),
        actions in proptest::collection::vec(action_strategy(), 0..60),
    ) {
        let deck = vec![
            DecklistEntry::new(TemplateId::new(1), 6),
            DecklistEntry::new(TemplateId::new(2), 4),
            DecklistEntry::new(TemplateId::new(3), 4),
        ];
        let mut duel = Duel::builder()
            .build(&catalog(), &deck, &deck, seed)
            .unwrap();

        let mut state = duel.state().clone();
        for action in &actions {
            let (next, _report) = state.apply(action);
            state = next;

            for seat in Seat::ALL {
                let board = state.board(seat);
                prop_assert!(board.is_conserved());
                prop_assert_eq!(
                    board.deck_size() + board.hand_size() + board.occupied_slots(),
                    14
                );

                let energy = state.energy(seat);
                for color in EnergyColor::ALL {
                    prop_assert!(energy.get(color) <= energy.cap());
                }

                let life = state.life(seat);
                prop_assert!(life.current() <= life.max());
            }

            if state.outcome().is_some() {
                break;
            }
        }

        // The controller sees the same invariants.
        for action in &actions {
            match action {
                Action::DrawCard { seat } => {
                    duel.draw_card(*seat);
                }
                Action::AdvancePhase => {
                    duel.advance_phase();
                }
                _ => {}
            }
        }
        for seat in Seat::ALL {
            prop_assert!(duel.state().board(seat).is_conserved());
        }
    }

    /// The same seed and action sequence always produce the same log.
    #[test]
    fn prop_replay_is_deterministic(
        seed in any::<u64>(),
        actions in proptest::collection::vec(action_strategy(), 0..30),
    ) {
        let deck = vec![DecklistEntry::new(TemplateId::new(1), 12)];
        let build = || {
            Duel::builder()
                .build(&catalog(), &deck, &deck, seed)
                .unwrap()
        };

        let mut a = build().state().clone();
        let mut b = build().state().clone();
        for action in &actions {
            a = a.apply(action).0;
            b = b.apply(action).0;
        }

        prop_assert_eq!(a.log().len(), b.log().len());
        for (ea, eb) in a.log().iter().zip(b.log().iter()) {
            prop_assert_eq!(ea, eb);
        }
    }
}
