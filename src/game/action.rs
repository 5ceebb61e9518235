//! Actions and the resolution catalogue that unlocks them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::{Face, Pool};

/// An effect a player may resolve from their dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Heal a chosen player by one point.
    Beer,
    /// Hit every other player for one point and hand back the roller's arrows.
    Gatlings,
    /// Hit one player at the given seating distance.
    Shoot {
        /// Seats between shooter and target (1 or 2).
        distance: u8,
    },
}

impl Action {
    /// The resolution catalogue, in offer order.
    pub const CATALOGUE: [Action; 4] = [
        Action::Beer,
        Action::Gatlings,
        Action::Shoot { distance: 1 },
        Action::Shoot { distance: 2 },
    ];

    /// Dice spent to resolve this action.
    #[must_use]
    pub fn required(self) -> Pool {
        match self {
            Action::Beer => Pool::of(Face::Beer, 1),
            Action::Gatlings => Pool::of(Face::Gatling, 3),
            Action::Shoot { distance: 1 } => Pool::of(Face::Shoot1, 1),
            Action::Shoot { .. } => Pool::of(Face::Shoot2, 1),
        }
    }

    /// Actions the pool can currently pay for, in catalogue order.
    ///
    /// Several may be available at once; the actor always picks.
    #[must_use]
    pub fn resolvable(pool: &Pool) -> Vec<Action> {
        Self::CATALOGUE
            .into_iter()
            .filter(|action| pool.contains(&action.required()))
            .collect()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Beer => f.write_str("Beer"),
            Action::Gatlings => f.write_str("Gatlings"),
            Action::Shoot { distance } => write!(f, "Shoot {distance}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolvable_offers_everything_paid_for() {
        let pool: Pool = [Face::Beer, Face::Shoot1, Face::Arrow].into_iter().collect();
        assert_eq!(
            Action::resolvable(&pool),
            vec![Action::Beer, Action::Shoot { distance: 1 }]
        );
    }

    #[test]
    fn test_gatlings_needs_three() {
        let mut pool = Pool::of(Face::Gatling, 2);
        assert!(Action::resolvable(&pool).is_empty());

        pool.insert(Face::Gatling, 1);
        assert_eq!(Action::resolvable(&pool), vec![Action::Gatlings]);
    }

    #[test]
    fn test_nothing_resolvable_from_arrows_and_dynamite() {
        let pool: Pool = [Face::Arrow, Face::Dynamite, Face::Dynamite]
            .into_iter()
            .collect();
        assert!(Action::resolvable(&pool).is_empty());
    }

    #[test]
    fn test_action_names() {
        assert_eq!(Action::Beer.to_string(), "Beer");
        assert_eq!(Action::Gatlings.to_string(), "Gatlings");
        assert_eq!(Action::Shoot { distance: 2 }.to_string(), "Shoot 2");
    }
}
