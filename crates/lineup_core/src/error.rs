use thiserror::Error;

use crate::models::{PlayerId, SlotId};

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid player position: {0}")]
    InvalidPosition(String),

    #[error("Invalid slot type: {0}")]
    InvalidSlotType(String),

    #[error("Invalid health status: {0}")]
    InvalidHealth(String),

    #[error("Slot {0} is not part of the roster")]
    UnknownSlot(SlotId),

    #[error("Player {0} is not part of the roster")]
    UnknownPlayer(PlayerId),

    #[error("Duplicate slot id: {0}")]
    DuplicateSlot(SlotId),

    #[error("Duplicate player id: {0}")]
    DuplicatePlayer(PlayerId),

    #[error("Player {player_id} is assigned to both slot {first} and slot {second}")]
    PlayerAssignedTwice { player_id: PlayerId, first: SlotId, second: SlotId },

    #[error("Player {0} has no positions")]
    NoPositions(PlayerId),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RosterError {
    /// True for a structurally malformed roster snapshot (as opposed to an
    /// unknown code or a JSON transport problem).
    pub fn is_snapshot_error(&self) -> bool {
        match self {
            RosterError::UnknownSlot(_) => true,
            RosterError::UnknownPlayer(_) => true,
            RosterError::DuplicateSlot(_) => true,
            RosterError::DuplicatePlayer(_) => true,
            RosterError::PlayerAssignedTwice { .. } => true,
            RosterError::NoPositions(_) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
