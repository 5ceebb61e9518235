//! Game layer for Bang.
//!
//! Implements the dice game rules behind a suspend/resume protocol:
//! - Dice faces and pools
//! - Roles, players and the seating around the table
//! - Arrow economy, damage and the action effects
//! - The resumable turn engine

mod action;
mod dice;
mod effects;
mod engine;
pub mod invariants;
mod player;
mod protocol;
mod rng;
mod role;
mod rules;
mod state;

pub use action::Action;
pub use dice::{Face, Pool};
pub use engine::Game;
pub use invariants::{InvariantViolation, check_invariants};
pub use player::{BASE_HEALTH, Player, PlayerId, SHERIFF_BONUS, player_name};
pub use protocol::{Event, Outcome, Request, RequestKind, Resume, Seat, Step};
pub use rng::Rng;
pub use role::{Faction, MAX_PLAYERS, MIN_PLAYERS, Role, role_table};
pub use rules::{DYNAMITE_LIMIT, Rules};
pub use state::GameState;
