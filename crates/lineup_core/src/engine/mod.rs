//! Assignment engine: fills lineup slots one at a time from the players who
//! have a game, preferring healthy players and leaving settled players alone.

pub mod assign;
pub mod health;
pub mod observer;
pub mod selector;


#[cfg(all(test, feature = "proptest"))]
mod proptests;

pub use assign::{calculate_new_roster, find_best_player_for_slot, RosterAssigner};
pub use health::{get_healthiest_players, rank_by_health};
pub use observer::{DecisionLog, NoopObserver, SelectionEvent, SelectionObserver, TracingObserver};
