//! Decision trace for the assignment engine.
//!
//! Every slot decision is reported to a [`SelectionObserver`]. Observers only
//! watch; nothing they do feeds back into the selection.

use serde::Serialize;
use std::sync::Mutex;
use tracing::debug;

use crate::models::{PlayerId, SlotId};

/// What the engine decided for one slot, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum SelectionEvent {
    /// No available player is eligible for the slot.
    NoCandidate { slot_id: SlotId },
    /// Exactly one available player is eligible.
    SingleCandidate { slot_id: SlotId, player_id: PlayerId },
    /// The incumbent stays because the lineup has room or they are among the
    /// healthiest candidates.
    IncumbentRetained { slot_id: SlotId, player_id: PlayerId },
    /// Healthiest candidate not pinned to another slot of the same type.
    FirstAvailableChosen { slot_id: SlotId, player_id: PlayerId },
    /// Every candidate already sits in a slot of the same type.
    AllCandidatesBlocked { slot_id: SlotId },
    /// No candidate was chosen but the previous occupant keeps the slot.
    IncumbentKept { slot_id: SlotId, player_id: PlayerId },
    /// No candidate was chosen and the slot is left empty.
    SlotCleared { slot_id: SlotId },
}

impl SelectionEvent {
    pub fn slot_id(&self) -> SlotId {
        match *self {
            SelectionEvent::NoCandidate { slot_id }
            | SelectionEvent::SingleCandidate { slot_id, .. }
            | SelectionEvent::IncumbentRetained { slot_id, .. }
            | SelectionEvent::FirstAvailableChosen { slot_id, .. }
            | SelectionEvent::AllCandidatesBlocked { slot_id }
            | SelectionEvent::IncumbentKept { slot_id, .. }
            | SelectionEvent::SlotCleared { slot_id } => slot_id,
        }
    }

    pub fn player_id(&self) -> Option<PlayerId> {
        match *self {
            SelectionEvent::SingleCandidate { player_id, .. }
            | SelectionEvent::IncumbentRetained { player_id, .. }
            | SelectionEvent::FirstAvailableChosen { player_id, .. }
            | SelectionEvent::IncumbentKept { player_id, .. } => Some(player_id),
            SelectionEvent::NoCandidate { .. }
            | SelectionEvent::AllCandidatesBlocked { .. }
            | SelectionEvent::SlotCleared { .. } => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SelectionEvent::NoCandidate { .. } => "no_candidate",
            SelectionEvent::SingleCandidate { .. } => "single_candidate",
            SelectionEvent::IncumbentRetained { .. } => "incumbent_retained",
            SelectionEvent::FirstAvailableChosen { .. } => "first_available_chosen",
            SelectionEvent::AllCandidatesBlocked { .. } => "all_candidates_blocked",
            SelectionEvent::IncumbentKept { .. } => "incumbent_kept",
            SelectionEvent::SlotCleared { .. } => "slot_cleared",
        }
    }
}

pub trait SelectionObserver {
    fn on_decision(&self, event: &SelectionEvent);
}

impl<O: SelectionObserver + ?Sized> SelectionObserver for &O {
    fn on_decision(&self, event: &SelectionEvent) {
        (**self).on_decision(event)
    }
}

/// Forwards decisions to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SelectionObserver for TracingObserver {
    fn on_decision(&self, event: &SelectionEvent) {
        match event.player_id() {
            Some(player_id) => debug!(
                target: "lineup_core::engine",
                slot_id = event.slot_id().0,
                player_id = player_id.0,
                decision = event.name(),
                "slot decision"
            ),
            None => debug!(
                target: "lineup_core::engine",
                slot_id = event.slot_id().0,
                decision = event.name(),
                "slot decision"
            ),
        }
    }
}

/// Discards every decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SelectionObserver for NoopObserver {
    fn on_decision(&self, _event: &SelectionEvent) {}
}

/// Collects decisions in order, for callers that want to explain a lineup.
#[derive(Debug, Default)]
pub struct DecisionLog {
    events: Mutex<Vec<SelectionEvent>>,
}

impl DecisionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SelectionEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn for_slot(&self, slot_id: SlotId) -> Vec<SelectionEvent> {
        self.events().into_iter().filter(|e| e.slot_id() == slot_id).collect()
    }
}

impl SelectionObserver for DecisionLog {
    fn on_decision(&self, event: &SelectionEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(*event),
            Err(poisoned) => poisoned.into_inner().push(*event),
        }
    }
}
