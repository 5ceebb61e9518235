//! Roles, factions and the fixed role table.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Fewest players a game supports.
pub const MIN_PLAYERS: usize = 3;

/// Most players a game supports.
pub const MAX_PLAYERS: usize = 8;

/// A secret role dealt at game start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Starts the game and has two extra health.
    Sheriff,
    /// Wins with the Sheriff.
    Vice,
    /// Wins when the Sheriff dies.
    Outlaw,
    /// Wins by being the last one standing.
    Renegade,
}

impl Role {
    /// Display name of the role.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Sheriff => "Sheriff",
            Role::Vice => "Vice",
            Role::Outlaw => "Outlaw",
            Role::Renegade => "Renegade",
        }
    }

    /// The side this role wins with.
    #[must_use]
    pub const fn faction(self) -> Faction {
        match self {
            Role::Sheriff | Role::Vice => Faction::Law,
            Role::Outlaw => Faction::Outlaws,
            Role::Renegade => Faction::Renegade,
        }
    }

    /// Whether a player in this role wants `other` dead.
    #[must_use]
    pub const fn is_hostile_to(self, other: Role) -> bool {
        match self.faction() {
            Faction::Law => !matches!(other.faction(), Faction::Law),
            Faction::Outlaws => matches!(other.faction(), Faction::Law),
            Faction::Renegade => true,
        }
    }
}

/// The winning side of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// The Sheriff and any Vices.
    Law,
    /// The Outlaws.
    Outlaws,
    /// A lone Renegade.
    Renegade,
}

impl Faction {
    /// Every faction, in display order.
    pub const ALL: [Faction; 3] = [Faction::Law, Faction::Outlaws, Faction::Renegade];

    /// Display name of the faction.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Faction::Law => "Sheriff & Vice",
            Faction::Outlaws => "Outlaws",
            Faction::Renegade => "Renegade",
        }
    }
}

const ROLES_3: [Role; 3] = [Role::Sheriff, Role::Outlaw, Role::Renegade];
const ROLES_4: [Role; 4] = [Role::Sheriff, Role::Outlaw, Role::Renegade, Role::Renegade];
const ROLES_5: [Role; 5] = [
    Role::Sheriff,
    Role::Vice,
    Role::Outlaw,
    Role::Outlaw,
    Role::Renegade,
];
const ROLES_6: [Role; 6] = [
    Role::Sheriff,
    Role::Vice,
    Role::Outlaw,
    Role::Outlaw,
    Role::Renegade,
    Role::Renegade,
];
const ROLES_7: [Role; 7] = [
    Role::Sheriff,
    Role::Vice,
    Role::Vice,
    Role::Outlaw,
    Role::Outlaw,
    Role::Outlaw,
    Role::Renegade,
];
const ROLES_8: [Role; 8] = [
    Role::Sheriff,
    Role::Vice,
    Role::Vice,
    Role::Outlaw,
    Role::Outlaw,
    Role::Outlaw,
    Role::Renegade,
    Role::Renegade,
];

/// The roles dealt for a given player count, before shuffling.
///
/// # Errors
///
/// Returns [`GameError::InvalidPlayerCount`] outside 3-8 players.
pub fn role_table(players: usize) -> Result<&'static [Role], GameError> {
    match players {
        3 => Ok(&ROLES_3),
        4 => Ok(&ROLES_4),
        5 => Ok(&ROLES_5),
        6 => Ok(&ROLES_6),
        7 => Ok(&ROLES_7),
        8 => Ok(&ROLES_8),
        count => Err(GameError::InvalidPlayerCount { count }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_table_sizes() {
        for players in MIN_PLAYERS..=MAX_PLAYERS {
            let roles = role_table(players).unwrap();
            assert_eq!(roles.len(), players);
            assert_eq!(roles.iter().filter(|&&r| r == Role::Sheriff).count(), 1);
        }
    }

    #[test]
    fn test_role_table_rejects_unsupported() {
        assert_eq!(
            role_table(2),
            Err(GameError::InvalidPlayerCount { count: 2 })
        );
        assert!(role_table(9).is_err());
    }

    #[test]
    fn test_hostility() {
        assert!(Role::Outlaw.is_hostile_to(Role::Sheriff));
        assert!(!Role::Outlaw.is_hostile_to(Role::Outlaw));
        assert!(Role::Sheriff.is_hostile_to(Role::Renegade));
        assert!(!Role::Vice.is_hostile_to(Role::Sheriff));
        assert!(Role::Renegade.is_hostile_to(Role::Renegade));
    }
}
