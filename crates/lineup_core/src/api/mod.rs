//! JSON API for lineup assignment
//!
//! Accepts a roster snapshot as produced by the data-access layer (raw
//! position, slot-type and health codes), runs one assignment pass and
//! reports the new lineup together with the slot moves needed to reach it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::config::AssignmentPolicy;
use crate::engine::RosterAssigner;
use crate::error::{Result, RosterError};
use crate::models::{
    LineupMove, Player, PlayerId, RosterMapping, RosterState, Slot, SlotId, SlotType,
};
use crate::SCHEMA_VERSION;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotRecord {
    pub slot_id: SlotId,
    pub slot_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub player_id: PlayerId,
    pub name: String,
    pub positions: Vec<String>,
    pub health: String,
    #[serde(default)]
    pub opponent: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    pub slot_id: SlotId,
    pub player_id: Option<PlayerId>,
}

/// Lineup request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineupRequest {
    pub schema_version: u8,
    pub slots: Vec<SlotRecord>,
    pub players: Vec<PlayerRecord>,
    #[serde(default)]
    pub assignments: Vec<SlotAssignment>,
    #[serde(default)]
    pub policy: Option<AssignmentPolicy>,
}

/// Lineup response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineupResponse {
    pub schema_version: u8,
    /// False when the computed lineup equals the submitted one, so there is
    /// nothing to submit.
    pub changed: bool,
    /// One entry per slot, in slot order.
    pub assignments: Vec<SlotAssignment>,
    pub moves: Vec<LineupMove>,
}

impl LineupRequest {
    /// Parse codes and validate the snapshot.
    pub fn into_state(self) -> Result<RosterState> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(RosterError::UnsupportedSchema {
                found: self.schema_version,
                expected: SCHEMA_VERSION,
            });
        }

        let slots = self
            .slots
            .into_iter()
            .map(|record| -> Result<Slot> {
                let slot_type = record.slot_type.parse::<SlotType>()?;
                Ok(Slot::new(record.slot_id, slot_type))
            })
            .collect::<Result<Vec<_>>>()?;

        let players = self
            .players
            .into_iter()
            .map(|record| {
                Player::from_codes(
                    record.player_id,
                    record.name,
                    record.positions.as_slice(),
                    &record.health,
                    record.opponent,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        let mut builder = RosterMapping::builder();
        let mut seen = HashSet::with_capacity(self.assignments.len());
        for assignment in &self.assignments {
            if !seen.insert(assignment.slot_id) {
                return Err(RosterError::DuplicateSlot(assignment.slot_id));
            }
            builder.assign(assignment.slot_id, assignment.player_id);
        }

        RosterState::new(slots, players, builder.build())
    }
}

impl LineupResponse {
    pub fn from_states(before: &RosterState, after: &RosterState) -> Self {
        let assignments = after
            .slots()
            .iter()
            .map(|slot| SlotAssignment {
                slot_id: slot.id,
                player_id: after.mapping().get(slot.id),
            })
            .collect();

        Self {
            schema_version: SCHEMA_VERSION,
            changed: !before.is_equivalent_to(after),
            assignments,
            moves: before.changes(after),
        }
    }
}

/// Run one assignment pass over a JSON roster snapshot.
pub fn calculate_lineup(request: LineupRequest) -> Result<LineupResponse> {
    let policy = request.policy.unwrap_or_default();
    let state = request.into_state()?;
    let next = RosterAssigner::with_policy(policy).calculate_new_roster(&state);
    let response = LineupResponse::from_states(&state, &next);
    debug!(
        slots = state.slots().len(),
        players = state.players().len(),
        moves = response.moves.len(),
        "lineup calculated"
    );
    Ok(response)
}

/// String-in, string-out variant of [`calculate_lineup`].
pub fn calculate_lineup_json(request_json: &str) -> Result<String> {
    let request: LineupRequest = serde_json::from_str(request_json)?;
    let response = calculate_lineup(request)?;
    Ok(serde_json::to_string(&response)?)
}
