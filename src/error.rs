//! Error types for the game engine and its resume protocol.

use crate::game::RequestKind;

/// Errors surfaced by game construction and by the resume protocol.
///
/// None of these are raised by the rules themselves: every rule operation is
/// total. They describe a caller handing the engine something it cannot use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The player count has no role table.
    #[error("unsupported player count {count} (expected 3-8)")]
    InvalidPlayerCount {
        /// The rejected player count.
        count: usize,
    },

    /// A rules override is unusable.
    #[error("invalid rules: {reason}")]
    InvalidRules {
        /// Why the rules were rejected.
        reason: &'static str,
    },

    /// The answer does not satisfy the pending request.
    #[error("invalid answer to {expected} request: {reason}")]
    InvalidResume {
        /// The kind of request that is pending.
        expected: RequestKind,
        /// What was wrong with the answer.
        reason: &'static str,
    },

    /// A decision was supplied while no request was pending.
    #[error("a decision was supplied but no request is pending")]
    UnexpectedResume,
}

/// Result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GameError::InvalidPlayerCount { count: 9 };
        assert_eq!(err.to_string(), "unsupported player count 9 (expected 3-8)");

        let err = GameError::InvalidResume {
            expected: RequestKind::ChooseAction,
            reason: "action was not offered",
        };
        assert_eq!(
            err.to_string(),
            "invalid answer to choose-action request: action was not offered"
        );
    }
}
