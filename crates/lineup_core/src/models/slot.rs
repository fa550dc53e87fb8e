use serde::{Deserialize, Serialize};
use std::fmt;

use super::position::SlotType;

/// Identity of a lineup slot, unique within one roster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct SlotId(pub u32);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An active lineup slot. Immutable once built.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Slot {
    pub id: SlotId,
    pub slot_type: SlotType,
}

impl Slot {
    pub fn new(id: SlotId, slot_type: SlotType) -> Self {
        Self { id, slot_type }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.slot_type, self.id)
    }
}
