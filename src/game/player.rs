//! Player state management.

use serde::{Deserialize, Serialize};

use crate::game::Role;

/// Unique identifier for a player: their original seat index.
pub type PlayerId = u8;

/// Health of every role except the Sheriff.
pub const BASE_HEALTH: u32 = 8;

/// Extra health granted to the Sheriff.
pub const SHERIFF_BONUS: u32 = 2;

/// Stable display name for a seat.
#[must_use]
pub fn player_name(id: PlayerId) -> String {
    format!("Player {id}")
}

/// State for a single player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier for this player.
    pub id: PlayerId,
    /// Display name, stable for the whole game.
    pub name: String,
    /// Role dealt at game start.
    pub role: Role,
    /// Damage this player can take before dying.
    pub health: u32,
    /// Damage taken so far.
    pub damage: u32,
    /// Arrows held by this player.
    pub arrows: u32,
}

impl Player {
    /// Create a new player with the given seat and role.
    #[must_use]
    pub fn new(id: PlayerId, role: Role) -> Self {
        let health = if role == Role::Sheriff {
            BASE_HEALTH + SHERIFF_BONUS
        } else {
            BASE_HEALTH
        };

        Self {
            id,
            name: player_name(id),
            role,
            health,
            damage: 0,
            arrows: 0,
        }
    }

    /// Whether the player has taken lethal damage.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.damage >= self.health
    }

    /// Health left before death.
    #[must_use]
    pub const fn life(&self) -> u32 {
        self.health.saturating_sub(self.damage)
    }

    /// Heal exactly one point of damage.
    pub fn heal_one(&mut self) {
        self.damage = self.damage.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::new(1, Role::Outlaw);
        assert_eq!(player.id, 1);
        assert_eq!(player.name, "Player 1");
        assert_eq!(player.health, 8);
        assert_eq!(player.damage, 0);
        assert_eq!(player.arrows, 0);
        assert!(!player.is_dead());
    }

    #[test]
    fn test_sheriff_health() {
        let player = Player::new(0, Role::Sheriff);
        assert_eq!(player.health, 10);
        assert_eq!(player.life(), 10);
    }

    #[test]
    fn test_player_death() {
        let mut player = Player::new(2, Role::Renegade);
        player.damage = 7;
        assert!(!player.is_dead());
        assert_eq!(player.life(), 1);

        player.damage = 8;
        assert!(player.is_dead());
        assert_eq!(player.life(), 0);
    }

    #[test]
    fn test_heal_is_one_point() {
        let mut player = Player::new(1, Role::Vice);
        player.damage = 3;
        player.heal_one();
        assert_eq!(player.damage, 2);

        player.damage = 0;
        player.heal_one();
        assert_eq!(player.damage, 0);
    }
}
