//! The slot-by-slot assignment pass.

use std::collections::HashSet;

use super::observer::{SelectionEvent, SelectionObserver, TracingObserver};
use crate::config::AssignmentPolicy;
use crate::models::{player_matches_slot, Player, PlayerId, RosterState, Slot};

/// Greedy lineup builder.
///
/// Slots are filled in roster order and each slot gets the best player still
/// available. A player consumed by one slot is never offered to a later one,
/// and a decision is never revisited.
#[derive(Debug, Clone, Default)]
pub struct RosterAssigner<O = TracingObserver> {
    pub(crate) policy: AssignmentPolicy,
    pub(crate) observer: O,
}

impl RosterAssigner<TracingObserver> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: AssignmentPolicy) -> Self {
        Self { policy, observer: TracingObserver }
    }
}

impl<O: SelectionObserver> RosterAssigner<O> {
    pub fn with_observer(observer: O) -> Self {
        Self { policy: AssignmentPolicy::default(), observer }
    }

    pub fn policy(mut self, policy: AssignmentPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Derive a new lineup from `state`.
    ///
    /// The returned state shares slots and players with `state` and carries a
    /// freshly built mapping; `state` itself is not modified.
    pub fn calculate_new_roster(&self, state: &RosterState) -> RosterState {
        let mut available: Vec<&Player> = state.playing_players().collect();
        let mut assigned: HashSet<PlayerId> = HashSet::with_capacity(state.slots().len());
        let mut builder = state.mapping().to_builder();

        for slot in state.slots() {
            let occupant = match self.find_best_player_for_slot(state, slot, &available) {
                Some(chosen) => Some(chosen),
                None => self.fallback_occupant(state, slot, &available, &assigned),
            };

            if let Some(player) = occupant {
                available.retain(|p| p.id != player.id);
                assigned.insert(player.id);
            }
            builder.assign(slot.id, occupant.map(|p| p.id));
        }

        state.with_mapping(builder.build())
    }

    /// Whether the previous occupant of `slot` may stay when no candidate was
    /// chosen for it.
    fn fallback_occupant<'a>(
        &self,
        state: &'a RosterState,
        slot: &Slot,
        available: &[&'a Player],
        assigned: &HashSet<PlayerId>,
    ) -> Option<&'a Player> {
        let kept = state.current_player(slot).filter(|incumbent| {
            if assigned.contains(&incumbent.id) || !player_matches_slot(incumbent, slot) {
                return false;
            }
            let still_available = available.iter().any(|p| p.id == incumbent.id);
            still_available || (!incumbent.is_playing() && self.policy.retain_inactive_incumbent)
        });

        let event = match kept {
            Some(player) => {
                SelectionEvent::IncumbentKept { slot_id: slot.id, player_id: player.id }
            }
            None => SelectionEvent::SlotCleared { slot_id: slot.id },
        };
        self.observer.on_decision(&event);
        kept
    }
}

/// [`RosterAssigner::find_best_player_for_slot`] with the default policy,
/// tracing decisions at debug level.
pub fn find_best_player_for_slot<'a>(
    state: &'a RosterState,
    slot: &Slot,
    available: &[&'a Player],
) -> Option<&'a Player> {
    RosterAssigner::new().find_best_player_for_slot(state, slot, available)
}

/// [`RosterAssigner::calculate_new_roster`] with the default policy, tracing
/// decisions at debug level.
pub fn calculate_new_roster(state: &RosterState) -> RosterState {
    RosterAssigner::new().calculate_new_roster(state)
}
