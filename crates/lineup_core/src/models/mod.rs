//! Domain model: slots, players, roster snapshots and eligibility.

pub mod player;
pub mod position;
pub mod roster;
pub mod slot;

pub use player::{Health, Player, PlayerId};
pub use position::{
    player_matches_slot, position_code_matches_slot, position_matches_slot, Position, SlotType,
    GENERIC_SLOT_TYPES, SPECIFIC_SLOT_TYPES,
};
pub use roster::{LineupMove, RosterMapping, RosterMappingBuilder, RosterState};
pub use slot::{Slot, SlotId};
