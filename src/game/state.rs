//! Game state management.

use crate::error::GameError;
use crate::game::{
    Face, Faction, MAX_PLAYERS, MIN_PLAYERS, Outcome, Player, PlayerId, Pool, Rng, Role, Rules,
    Seat, role_table,
};

/// Complete game state.
///
/// Players are stored by seat index for the whole game; the seating list
/// holds only the living, in seat order. Only the engine mutates it.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Every player dealt in, indexed by [`PlayerId`].
    players: Vec<Player>,
    /// Living players in seating order.
    seating: Vec<PlayerId>,
    /// Whose turn it is.
    current: PlayerId,
    /// Arrows left in the shared pile.
    arrows: u32,
    /// Completed turns.
    turn: u32,
    /// Rule constants for this game.
    rules: Rules,
    /// The game's only random source.
    rng: Rng,
}

impl GameState {
    /// Deal a new game: shuffle the role table for `players` seats.
    ///
    /// # Errors
    ///
    /// Returns an error for an unsupported player count or invalid rules.
    pub fn new(players: usize, seed: u64, rules: Rules) -> Result<Self, GameError> {
        let mut roles = role_table(players)?.to_vec();
        let mut rng = Rng::new(seed);
        rng.shuffle(&mut roles);
        Self::deal(&roles, rng, rules)
    }

    /// Seat players with a fixed role assignment, in seat order.
    ///
    /// The Sheriff (or seat 0 when there is none) takes the first turn.
    ///
    /// # Errors
    ///
    /// Returns an error for an unsupported player count or invalid rules.
    pub fn with_roles(roles: &[Role], seed: u64, rules: Rules) -> Result<Self, GameError> {
        Self::deal(roles, Rng::new(seed), rules)
    }

    fn deal(roles: &[Role], rng: Rng, rules: Rules) -> Result<Self, GameError> {
        rules.validate()?;
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&roles.len()) {
            return Err(GameError::InvalidPlayerCount { count: roles.len() });
        }

        #[allow(clippy::cast_possible_truncation)]
        let players: Vec<Player> = roles
            .iter()
            .enumerate()
            .map(|(seat, &role)| Player::new(seat as PlayerId, role))
            .collect();
        let seating = players.iter().map(|p| p.id).collect();
        let current = players
            .iter()
            .find(|p| p.role == Role::Sheriff)
            .map_or(0, |p| p.id);

        Ok(Self {
            players,
            seating,
            current,
            arrows: rules.arrows,
            turn: 0,
            rules,
            rng,
        })
    }

    /// Every player dealt in, dead or alive, by seat.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get a player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(usize::from(id))
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(usize::from(id))
    }

    /// Living players in seating order.
    #[must_use]
    pub fn seating(&self) -> &[PlayerId] {
        &self.seating
    }

    /// Get all alive players.
    pub fn alive_players(&self) -> impl Iterator<Item = &Player> {
        self.seating.iter().filter_map(|&id| self.player(id))
    }

    /// Whether a player is still seated.
    #[must_use]
    pub fn is_alive(&self, id: PlayerId) -> bool {
        self.seating.contains(&id)
    }

    /// The player whose turn it is.
    #[must_use]
    pub const fn current(&self) -> PlayerId {
        self.current
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[usize::from(self.current)]
    }

    /// Arrows left in the shared pile.
    #[must_use]
    pub const fn arrows(&self) -> u32 {
        self.arrows
    }

    /// Completed turns.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// Rule constants for this game.
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Public seat information for the start-of-game announcement.
    #[must_use]
    pub fn seats(&self) -> Vec<Seat> {
        self.players
            .iter()
            .map(|p| Seat {
                id: p.id,
                name: p.name.clone(),
                role: p.role,
            })
            .collect()
    }

    /// Players at cyclic seating `distance` from the current player.
    ///
    /// Seats `i` and `j` among `n` living players are at distance `d` when
    /// `|i - j|` is `d` or `n - d`. At small tables one player can sit at
    /// both, and at `n == d` the current player is their own target.
    #[must_use]
    pub fn players_by_distance(&self, distance: usize) -> Vec<PlayerId> {
        let n = self.seating.len();
        let Some(ci) = self.seating.iter().position(|&id| id == self.current) else {
            return Vec::new();
        };

        self.seating
            .iter()
            .enumerate()
            .filter(|&(i, _)| {
                let gap = i.abs_diff(ci);
                gap == distance || Some(gap) == n.checked_sub(distance)
            })
            .map(|(_, &id)| id)
            .collect()
    }

    /// The winning faction, if the game is over.
    ///
    /// A lone surviving Renegade wins outright; otherwise the Outlaws win
    /// once the Sheriff is dead, and the law wins once no Outlaw or
    /// Renegade is left.
    #[must_use]
    pub fn winner(&self) -> Option<Faction> {
        let alive = |role: Role| self.alive_players().any(|p| p.role == role);

        if self.seating.len() == 1 && alive(Role::Renegade) {
            Some(Faction::Renegade)
        } else if !alive(Role::Sheriff) {
            Some(Faction::Outlaws)
        } else if !alive(Role::Outlaw) && !alive(Role::Renegade) {
            Some(Faction::Law)
        } else {
            None
        }
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// How the game ended, if it has.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.winner().map(|winner| Outcome {
            winner,
            turns: self.turn,
            survivors: self.seating.clone(),
        })
    }

    /// Roll `n` fresh dice, every face equally likely.
    pub(crate) fn roll_dice(&mut self, n: u32) -> Pool {
        (0..n)
            .map(|_| Face::ALL[self.rng.below(Face::ALL.len())])
            .collect()
    }

    /// Move one arrow from the pile to a player. Returns the arrows left.
    pub(crate) fn take_arrow(&mut self, id: PlayerId) -> u32 {
        if let Some(player) = self.players.get_mut(usize::from(id)) {
            self.arrows = self.arrows.saturating_sub(1);
            player.arrows += 1;
        }
        self.arrows
    }

    /// Return up to `n` of a player's arrows to the pile.
    pub(crate) fn return_arrows(&mut self, id: PlayerId, n: u32) {
        if let Some(player) = self.players.get_mut(usize::from(id)) {
            let n = n.min(player.arrows);
            player.arrows -= n;
            self.arrows += n;
        }
    }

    /// Refill the pile after an Indian Attack.
    pub(crate) fn refill_arrows(&mut self) {
        self.arrows = self.rules.arrows;
    }

    /// Empty a player's hoard without returning it, yielding the count.
    pub(crate) fn clear_arrows(&mut self, id: PlayerId) -> u32 {
        self.players
            .get_mut(usize::from(id))
            .map_or(0, |p| std::mem::take(&mut p.arrows))
    }

    /// Remove a dead player from the table. Their arrows go back on the pile.
    pub(crate) fn eliminate(&mut self, id: PlayerId) {
        self.seating.retain(|&seated| seated != id);
        self.return_arrows(id, u32::MAX);
    }

    /// End the turn: pass play to the next living seat after the player who
    /// started it, even if that player has since died.
    pub(crate) fn advance_turn(&mut self) {
        let seats = self.players.len();
        let start = usize::from(self.current);
        #[allow(clippy::cast_possible_truncation)]
        let next = (1..=seats)
            .map(|step| ((start + step) % seats) as PlayerId)
            .find(|&id| self.is_alive(id));
        if let Some(next) = next {
            self.current = next;
        }
        self.turn += 1;
    }
}
