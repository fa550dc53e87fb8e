//! Positions, slot types and the eligibility table between them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RosterError};
use crate::models::{Player, Slot};

/// A player's natural position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Position {
    pub const ALL: [Position; 5] =
        [Position::PG, Position::SG, Position::SF, Position::PF, Position::C];

    pub fn code(&self) -> &'static str {
        match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
        }
    }

    pub fn is_guard(&self) -> bool {
        matches!(self, Position::PG | Position::SG)
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, Position::SF | Position::PF)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PG" => Ok(Position::PG),
            "SG" => Ok(Position::SG),
            "SF" => Ok(Position::SF),
            "PF" => Ok(Position::PF),
            "C" => Ok(Position::C),
            _ => Err(RosterError::InvalidPosition(s.to_string())),
        }
    }
}

/// Eligibility class of a roster slot.
///
/// The five specific types accept only their own position. `G` and `F` accept
/// either guard or either forward, and `UTIL` accepts anyone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum SlotType {
    PG,
    SG,
    SF,
    PF,
    C,
    G,
    F,
    UTIL,
}

pub const SPECIFIC_SLOT_TYPES: [SlotType; 5] =
    [SlotType::PG, SlotType::SG, SlotType::SF, SlotType::PF, SlotType::C];

pub const GENERIC_SLOT_TYPES: [SlotType; 3] = [SlotType::G, SlotType::F, SlotType::UTIL];

impl SlotType {
    pub fn code(&self) -> &'static str {
        match self {
            SlotType::PG => "PG",
            SlotType::SG => "SG",
            SlotType::SF => "SF",
            SlotType::PF => "PF",
            SlotType::C => "C",
            SlotType::G => "G",
            SlotType::F => "F",
            SlotType::UTIL => "UTIL",
        }
    }

    pub fn is_generic(&self) -> bool {
        GENERIC_SLOT_TYPES.contains(self)
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SlotType {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PG" => Ok(SlotType::PG),
            "SG" => Ok(SlotType::SG),
            "SF" => Ok(SlotType::SF),
            "PF" => Ok(SlotType::PF),
            "C" => Ok(SlotType::C),
            "G" => Ok(SlotType::G),
            "F" => Ok(SlotType::F),
            "UTIL" => Ok(SlotType::UTIL),
            _ => Err(RosterError::InvalidSlotType(s.to_string())),
        }
    }
}

/// Whether a player holding `position` may fill a slot of `slot_type`.
pub fn position_matches_slot(position: Position, slot_type: SlotType) -> bool {
    match slot_type {
        SlotType::UTIL => true,
        SlotType::G => position.is_guard(),
        SlotType::F => position.is_forward(),
        SlotType::PG => position == Position::PG,
        SlotType::SG => position == Position::SG,
        SlotType::SF => position == Position::SF,
        SlotType::PF => position == Position::PF,
        SlotType::C => position == Position::C,
    }
}

/// Raw-code form of [`position_matches_slot`].
///
/// Fails with [`RosterError::InvalidPosition`] for anything outside the five
/// recognized codes, even when the slot is `UTIL`: eligibility of an unknown
/// position is never assumed.
pub fn position_code_matches_slot(code: &str, slot_type: SlotType) -> Result<bool> {
    let position = code.parse::<Position>()?;
    Ok(position_matches_slot(position, slot_type))
}

pub fn player_matches_slot(player: &Player, slot: &Slot) -> bool {
    player
        .positions
        .iter()
        .any(|&position| position_matches_slot(position, slot.slot_type))
}
