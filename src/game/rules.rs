//! Tunable rule constants.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Dynamite faces that blow up in the roller's face.
pub const DYNAMITE_LIMIT: u32 = 3;

/// Numeric rule constants, fixed for a game at construction.
///
/// Faces, the resolution catalogue and the role tables are not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Capacity of the shared arrow pile.
    pub arrows: u32,
    /// Dice rolled at the start of a turn.
    pub dice: u32,
    /// Reroll rounds allowed per turn.
    pub rerolls: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            arrows: 9,
            dice: 5,
            rerolls: 2,
        }
    }
}

impl Rules {
    /// Check the rules can run a game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidRules`] for an empty arrow pile or no dice.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.arrows == 0 {
            return Err(GameError::InvalidRules {
                reason: "the arrow pile needs at least one arrow",
            });
        }
        if self.dice == 0 {
            return Err(GameError::InvalidRules {
                reason: "at least one die must be rolled",
            });
        }
        Ok(())
    }
}
