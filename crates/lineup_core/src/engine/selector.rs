//! Choosing one player for one slot.

use super::assign::RosterAssigner;
use super::health::{get_healthiest_players, rank_by_health};
use super::observer::{SelectionEvent, SelectionObserver};
use crate::models::{player_matches_slot, Player, RosterState, Slot};

impl<O: SelectionObserver> RosterAssigner<O> {
    /// Best player for `slot` among `available`, or `None` if nobody fits.
    ///
    /// `state` is the roster as it was before the current pass and is only
    /// read for current assignments. `available` holds the playing players
    /// not yet consumed by an earlier slot.
    pub fn find_best_player_for_slot<'a>(
        &self,
        state: &'a RosterState,
        slot: &Slot,
        available: &[&'a Player],
    ) -> Option<&'a Player> {
        let candidates: Vec<&'a Player> =
            available.iter().copied().filter(|p| player_matches_slot(p, slot)).collect();

        match candidates.as_slice() {
            [] => {
                self.observer.on_decision(&SelectionEvent::NoCandidate { slot_id: slot.id });
                return None;
            }
            [only] => {
                self.observer.on_decision(&SelectionEvent::SingleCandidate {
                    slot_id: slot.id,
                    player_id: only.id,
                });
                return Some(*only);
            }
            _ => {}
        }

        // An injured incumbent may stay while every playing player still fits;
        // once the lineup is crowded they must be among the healthiest to stay.
        let healthiest = get_healthiest_players(&candidates);
        if let Some(current) = state.current_player(slot) {
            let is_candidate = candidates.iter().any(|p| p.id == current.id);
            let is_healthiest = healthiest.iter().any(|p| p.id == current.id);
            let has_room = self.policy.retain_incumbent_when_room && state.has_room_for_everyone();
            if is_candidate && (has_room || is_healthiest) {
                self.observer.on_decision(&SelectionEvent::IncumbentRetained {
                    slot_id: slot.id,
                    player_id: current.id,
                });
                return Some(current);
            }
        }

        // The lineup site refuses moves between two slots of the same type
        // (in practice UTIL to UTIL), so skip players pinned to one.
        for candidate in rank_by_health(&candidates) {
            let blocked = self.policy.forbid_same_type_moves
                && state
                    .current_slot(candidate)
                    .is_some_and(|current_slot| current_slot.slot_type == slot.slot_type);
            if !blocked {
                self.observer.on_decision(&SelectionEvent::FirstAvailableChosen {
                    slot_id: slot.id,
                    player_id: candidate.id,
                });
                return Some(candidate);
            }
        }

        self.observer.on_decision(&SelectionEvent::AllCandidatesBlocked { slot_id: slot.id });
        None
    }
}
