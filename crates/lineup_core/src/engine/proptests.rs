//! Property-based tests over generated rosters.

use proptest::prelude::*;
use std::collections::HashSet;

use super::*;
use crate::config::AssignmentPolicy;
use crate::models::{
    player_matches_slot, Health, Player, PlayerId, Position, RosterMapping, RosterState, Slot,
    SlotId, SlotType,
};

fn slot_type() -> impl Strategy<Value = SlotType> {
    prop_oneof![
        Just(SlotType::PG),
        Just(SlotType::SG),
        Just(SlotType::SF),
        Just(SlotType::PF),
        Just(SlotType::C),
        Just(SlotType::G),
        Just(SlotType::F),
        Just(SlotType::UTIL),
    ]
}

fn health() -> impl Strategy<Value = Health> {
    prop_oneof![
        Just(Health::Healthy),
        Just(Health::DayToDay),
        Just(Health::Out),
        Just(Health::Suspended),
    ]
}

fn positions() -> impl Strategy<Value = Vec<Position>> {
    proptest::sample::subsequence(Position::ALL.to_vec(), 1..=3)
}

prop_compose! {
    fn player_spec()(positions in positions(), health in health(), is_playing in any::<bool>())
        -> (Vec<Position>, Health, bool) {
        (positions, health, is_playing)
    }
}

// Well-formed rosters whose incumbents are always eligible for their slot.
prop_compose! {
    fn roster_state()(
        slot_types in proptest::collection::vec(slot_type(), 0..10),
        specs in proptest::collection::vec(player_spec(), 0..14),
        seats in proptest::collection::vec(any::<proptest::sample::Index>(), 0..10),
    ) -> RosterState {
        let slots: Vec<Slot> = slot_types
            .iter()
            .enumerate()
            .map(|(i, &slot_type)| Slot::new(SlotId(i as u32), slot_type))
            .collect();
        let players: Vec<Player> = specs
            .into_iter()
            .enumerate()
            .map(|(i, (positions, health, is_playing))| {
                let opponent = if is_playing { Some("OPP".to_string()) } else { None };
                let id = PlayerId(i as u64 + 100);
                Player::new(id, format!("P{}", i), positions, health, opponent)
            })
            .collect();

        let mut builder = RosterMapping::builder();
        let mut seated = HashSet::new();
        if !players.is_empty() {
            for (slot, seat) in slots.iter().zip(seats.iter()) {
                let player = seat.get(players.as_slice());
                if player_matches_slot(player, slot) && seated.insert(player.id) {
                    builder.assign(slot.id, Some(player.id));
                }
            }
        }

        RosterState::new(slots, players, builder.build()).unwrap()
    }
}

proptest! {
    /// Property: a pass is a pure function of its input
    #[test]
    fn prop_deterministic(state in roster_state()) {
        let first = calculate_new_roster(&state);
        let second = calculate_new_roster(&state);
        prop_assert!(first.is_equivalent_to(&second));
    }

    /// Property: no player fills two slots and every occupant is eligible
    #[test]
    fn prop_output_well_formed(state in roster_state()) {
        let next = calculate_new_roster(&state);
        let mut seen = HashSet::new();
        for (slot_id, player_id) in next.mapping().iter() {
            prop_assert!(seen.insert(player_id));
            let slot = next.slot_by_id(slot_id).unwrap();
            let player = next.player_by_id(player_id).unwrap();
            prop_assert!(player_matches_slot(player, slot));
        }
        prop_assert!(next.assigned_count() <= next.slots().len());
    }

    /// Property: the input snapshot is never modified
    #[test]
    fn prop_input_untouched(state in roster_state()) {
        let before = state.mapping().clone();
        let _ = calculate_new_roster(&state);
        prop_assert_eq!(state.mapping(), &before);
    }

    /// Property: every policy combination keeps the structural guarantees
    #[test]
    fn prop_policies_well_formed(
        state in roster_state(),
        keep in any::<bool>(),
        forbid in any::<bool>(),
        inactive in any::<bool>(),
    ) {
        let policy = AssignmentPolicy {
            retain_incumbent_when_room: keep,
            forbid_same_type_moves: forbid,
            retain_inactive_incumbent: inactive,
        };
        let assigner = RosterAssigner::with_observer(NoopObserver).policy(policy);
        let next = assigner.calculate_new_roster(&state);
        let mut seen = HashSet::new();
        for (slot_id, player_id) in next.mapping().iter() {
            prop_assert!(seen.insert(player_id));
            let slot = next.slot_by_id(slot_id).unwrap();
            let player = next.player_by_id(player_id).unwrap();
            prop_assert!(player_matches_slot(player, slot));
        }
        prop_assert!(next.assigned_count() <= next.slots().len());
    }
}
