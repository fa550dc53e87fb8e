//! Tunable rules for the assignment engine.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Which stability rules the engine applies while filling slots.
///
/// The defaults reproduce the established lineup behavior; every field can be
/// omitted from a serialized policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AssignmentPolicy {
    /// Keep an eligible playing incumbent whenever every playing player fits
    /// in the lineup, even if a healthier candidate exists.
    pub retain_incumbent_when_room: bool,
    /// Never pick a player who already sits in another slot of the same type
    /// (the lineup site rejects such moves, e.g. UTIL to UTIL).
    pub forbid_same_type_moves: bool,
    /// When no playing candidate fits a slot, keep an incumbent who has no
    /// game instead of emptying the slot.
    pub retain_inactive_incumbent: bool,
}

impl Default for AssignmentPolicy {
    fn default() -> Self {
        Self {
            retain_incumbent_when_room: true,
            forbid_same_type_moves: true,
            retain_inactive_incumbent: true,
        }
    }
}

impl AssignmentPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefer healthier players over incumbents even when nobody would be
    /// left out of the lineup.
    pub fn strict() -> Self {
        Self { retain_incumbent_when_room: false, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
