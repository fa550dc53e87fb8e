//! # lineup_core - Fantasy Basketball Lineup Assignment
//!
//! Assigns rostered players to active lineup slots, one slot at a time,
//! choosing the best eligible player who has a game while moving as few
//! settled players as possible.
//!
//! ## Features
//! - Position / slot-type eligibility (PG, SG, SF, PF, C, G, F, UTIL)
//! - Health-aware tie-breaking (healthy > day-to-day > out > suspended)
//! - Incumbent stability and no same-type slot swaps
//! - Immutable roster snapshots; every pass returns a new state
//! - Decision trace through an injectable observer (`tracing` by default)
//! - JSON API for the data-access layer

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;

pub use api::{calculate_lineup, calculate_lineup_json, LineupRequest, LineupResponse};
pub use config::AssignmentPolicy;
pub use engine::{
    calculate_new_roster, find_best_player_for_slot, get_healthiest_players, DecisionLog,
    RosterAssigner, SelectionEvent, SelectionObserver, TracingObserver,
};
pub use error::{Result, RosterError};
pub use models::{
    player_matches_slot, position_matches_slot, Health, LineupMove, Player, PlayerId, Position,
    RosterMapping, RosterState, Slot, SlotId, SlotType,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
