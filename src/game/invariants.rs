//! Game invariants - sanity checks that detect bugs.
//!
//! These hold between turns in every correctly implemented game. A violation
//! means the engine itself is broken, never that a player did something odd.

use crate::game::GameState;

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invariant violation: {message}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let capacity = state.rules().arrows;

    // Arrow conservation
    let hoarded: u32 = state.players().iter().map(|p| p.arrows).sum();
    if state.arrows() + hoarded != capacity {
        violations.push(InvariantViolation::new(format!(
            "{} arrows on the pile and {hoarded} hoarded, expected {capacity} in total",
            state.arrows()
        )));
    }
    if state.arrows() == 0 {
        violations.push(InvariantViolation::new("the arrow pile is empty"));
    }

    // Seating holds exactly the living, in seat order
    for player in state.players() {
        let seated = state.is_alive(player.id);
        if seated == player.is_dead() {
            violations.push(InvariantViolation::new(format!(
                "{} is {} but {}",
                player.name,
                if player.is_dead() { "dead" } else { "alive" },
                if seated { "still seated" } else { "not seated" },
            )));
        }
        if player.is_dead() && player.arrows > 0 {
            violations.push(InvariantViolation::new(format!(
                "dead {} still holds {} arrows",
                player.name, player.arrows
            )));
        }
    }
    if !state.seating().is_sorted() {
        violations.push(InvariantViolation::new(format!(
            "seating {:?} is out of order",
            state.seating()
        )));
    }

    // The current player is alive while the game goes on
    if !state.is_game_over() && !state.is_alive(state.current()) {
        violations.push(InvariantViolation::new(format!(
            "current player {} is not alive",
            state.current()
        )));
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}
