//! Roster snapshots: the slot sequence, the managed players and the
//! slot → player mapping between them.
//!
//! A [`RosterState`] never changes after construction. Deriving a new lineup
//! goes through a [`RosterMappingBuilder`], which is finalized into a fresh
//! [`RosterMapping`] and attached to a new state that shares the slot and
//! player data of the old one.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use super::player::{Player, PlayerId};
use super::slot::{Slot, SlotId};
use crate::error::{Result, RosterError};

/// Immutable slot → player assignment. A slot with no entry is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterMapping {
    entries: BTreeMap<SlotId, PlayerId>,
}

impl RosterMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> RosterMappingBuilder {
        RosterMappingBuilder::default()
    }

    /// Start a builder pre-filled with this mapping's entries.
    pub fn to_builder(&self) -> RosterMappingBuilder {
        RosterMappingBuilder { entries: self.entries.clone() }
    }

    pub fn get(&self, slot_id: SlotId) -> Option<PlayerId> {
        self.entries.get(&slot_id).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Occupied slots in slot-id order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, PlayerId)> + '_ {
        self.entries.iter().map(|(&slot_id, &player_id)| (slot_id, player_id))
    }

    pub fn slot_of(&self, player_id: PlayerId) -> Option<SlotId> {
        self.iter().find(|&(_, assigned)| assigned == player_id).map(|(slot_id, _)| slot_id)
    }
}

impl FromIterator<(SlotId, PlayerId)> for RosterMapping {
    fn from_iter<I: IntoIterator<Item = (SlotId, PlayerId)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

/// Accumulates assignments for one mapping; consumed by [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct RosterMappingBuilder {
    entries: BTreeMap<SlotId, PlayerId>,
}

impl RosterMappingBuilder {
    /// Set the occupant of `slot_id`, or empty it when `player_id` is `None`.
    pub fn assign(&mut self, slot_id: SlotId, player_id: Option<PlayerId>) -> &mut Self {
        match player_id {
            Some(player_id) => {
                self.entries.insert(slot_id, player_id);
            }
            None => {
                self.entries.remove(&slot_id);
            }
        }
        self
    }

    pub fn clear(&mut self, slot_id: SlotId) -> &mut Self {
        self.assign(slot_id, None)
    }

    pub fn build(self) -> RosterMapping {
        RosterMapping { entries: self.entries }
    }
}

/// One slot whose occupant differs between two roster states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupMove {
    pub slot_id: SlotId,
    pub from: Option<PlayerId>,
    pub to: Option<PlayerId>,
}

/// Snapshot of a roster at one point in time.
#[derive(Debug, Clone)]
pub struct RosterState {
    slots: Arc<[Slot]>,
    players: Arc<[Player]>,
    mapping: RosterMapping,
}

impl RosterState {
    /// Build a validated snapshot.
    ///
    /// Slot order is kept as given; it is the priority order used when a new
    /// lineup is derived.
    pub fn new(slots: Vec<Slot>, players: Vec<Player>, mapping: RosterMapping) -> Result<Self> {
        let mut slot_ids = HashSet::with_capacity(slots.len());
        for slot in &slots {
            if !slot_ids.insert(slot.id) {
                return Err(RosterError::DuplicateSlot(slot.id));
            }
        }

        let mut player_ids = HashSet::with_capacity(players.len());
        for player in &players {
            if !player_ids.insert(player.id) {
                return Err(RosterError::DuplicatePlayer(player.id));
            }
            if player.positions.is_empty() {
                return Err(RosterError::NoPositions(player.id));
            }
        }

        let mut seen: HashMap<PlayerId, SlotId> = HashMap::new();
        for (slot_id, player_id) in mapping.iter() {
            if !slot_ids.contains(&slot_id) {
                return Err(RosterError::UnknownSlot(slot_id));
            }
            if !player_ids.contains(&player_id) {
                return Err(RosterError::UnknownPlayer(player_id));
            }
            if let Some(&first) = seen.get(&player_id) {
                return Err(RosterError::PlayerAssignedTwice {
                    player_id,
                    first,
                    second: slot_id,
                });
            }
            seen.insert(player_id, slot_id);
        }

        Ok(Self { slots: slots.into(), players: players.into(), mapping })
    }

    /// A state with the same slots and players and a different mapping.
    ///
    /// The mapping is trusted to reference only known slots and players, so
    /// this stays crate-private; outside callers go through [`RosterState::new`].
    pub(crate) fn with_mapping(&self, mapping: RosterMapping) -> Self {
        Self { slots: Arc::clone(&self.slots), players: Arc::clone(&self.players), mapping }
    }

    /// A new state in which `slot` holds `player` (or is empty for `None`).
    /// `self` is left untouched.
    pub fn with_assignment(&self, player: Option<&Player>, slot: &Slot) -> Self {
        let mut builder = self.mapping.to_builder();
        builder.assign(slot.id, player.map(|p| p.id));
        self.with_mapping(builder.build())
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn mapping(&self) -> &RosterMapping {
        &self.mapping
    }

    pub fn slot_by_id(&self, slot_id: SlotId) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == slot_id)
    }

    pub fn player_by_id(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn current_player(&self, slot: &Slot) -> Option<&Player> {
        self.mapping.get(slot.id).and_then(|player_id| self.player_by_id(player_id))
    }

    /// The slot currently holding `player`, matched by id.
    pub fn current_slot(&self, player: &Player) -> Option<&Slot> {
        self.mapping.slot_of(player.id).and_then(|slot_id| self.slot_by_id(slot_id))
    }

    pub fn playing_players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.players.iter().filter(|p| p.is_playing())
    }

    /// True when every player with a game can be given a slot.
    pub fn has_room_for_everyone(&self) -> bool {
        self.playing_players().count() <= self.slots.len()
    }

    pub fn assigned_count(&self) -> usize {
        self.mapping.len()
    }

    /// Same occupant (or same emptiness) for every slot known to either state.
    pub fn is_equivalent_to(&self, other: &RosterState) -> bool {
        self.mapping == other.mapping
    }

    /// Slots whose occupant differs from `self` to `other`, in `self`'s slot
    /// order, followed by slots only `other` knows about.
    pub fn changes(&self, other: &RosterState) -> Vec<LineupMove> {
        let mut moves = Vec::new();
        let mut visited = HashSet::new();

        let slot_ids = self
            .slots
            .iter()
            .map(|s| s.id)
            .chain(self.mapping.iter().map(|(slot_id, _)| slot_id))
            .chain(other.slots.iter().map(|s| s.id))
            .chain(other.mapping.iter().map(|(slot_id, _)| slot_id));

        for slot_id in slot_ids {
            if !visited.insert(slot_id) {
                continue;
            }
            let from = self.mapping.get(slot_id);
            let to = other.mapping.get(slot_id);
            if from != to {
                moves.push(LineupMove { slot_id, from, to });
            }
        }
        moves
    }
}
