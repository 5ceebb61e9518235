//! Tournament runner for Bang games.
//!
//! Provides a pure function interface: `(seed, config) -> GameReport`
//!
//! The tournament runner handles:
//! - Dealing a table of bots for each seed
//! - Driving each game to an outcome or a turn limit
//! - Parallel batches with rayon, folded into [`TournamentStats`]

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::actor::{BotKind, Table};
use crate::driver::drive_for;
use crate::error::GameError;
use crate::game::{Faction, Game, PlayerId, Role, Rules};

/// Configuration for the tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Players per game.
    pub players: usize,
    /// Number of games to run.
    pub games: u64,
    /// Seed of the first game; game `i` uses `seed + i`.
    pub seed: u64,
    /// Turns before a game is abandoned as unfinished.
    pub max_turns: u32,
    /// The bot sitting at every seat.
    pub bot: BotKind,
    /// Rule constants.
    pub rules: Rules,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            players: 5,
            games: 1000,
            seed: 0,
            max_turns: 1000,
            bot: BotKind::default(),
            rules: Rules::default(),
        }
    }
}

/// Final result of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    /// The seed used for this game.
    pub seed: u64,
    /// The winning side (None if the turn limit was hit first).
    pub winner: Option<Faction>,
    /// Total turns played.
    pub turns: u32,
    /// Players alive at the end, in seating order.
    pub survivors: Vec<PlayerId>,
    /// Roles by seat.
    pub roles: Vec<Role>,
}

/// Error type for tournament operations.
#[derive(Debug, Clone, Copy, thiserror::Error)]
pub enum TournamentError {
    /// The configured table cannot be dealt.
    #[error("invalid table: {0}")]
    Game(#[from] GameError),
    /// Nothing to run.
    #[error("a tournament needs at least one game")]
    NoGames,
}

/// Run a complete game with the given seed.
///
/// This is the main entry point - a pure function from inputs to result.
///
/// # Determinism
///
/// Given the same seed and config, this function always produces the same
/// `GameReport`.
///
/// # Errors
///
/// Returns an error if the table cannot be dealt or a bot answers outside
/// an offer.
pub fn run_game(seed: u64, config: &TournamentConfig) -> Result<GameReport, TournamentError> {
    let mut game = Game::with_rules(config.players, seed, config.rules)?;
    let mut table = Table::of(config.bot, config.players, seed);
    let transcript = drive_for(&mut game, &mut table, Some(config.max_turns))?;

    let state = game.state();
    let report = GameReport {
        seed,
        winner: transcript.outcome.as_ref().map(|outcome| outcome.winner),
        turns: state.turn(),
        survivors: state.seating().to_vec(),
        roles: state.players().iter().map(|p| p.role).collect(),
    };
    debug!(seed, winner = ?report.winner, turns = report.turns, "game finished");
    Ok(report)
}

/// Run `config.games` games in parallel and aggregate them.
///
/// `on_game` is called once per game from the worker threads, in no
/// particular order.
///
/// # Errors
///
/// Returns an error if the table cannot be dealt or no games are requested.
pub fn run_tournament(
    config: &TournamentConfig,
    on_game: impl Fn(&GameReport) + Sync,
) -> Result<TournamentStats, TournamentError> {
    if config.games == 0 {
        return Err(TournamentError::NoGames);
    }
    // Surface configuration errors once instead of per game.
    Game::with_rules(config.players, config.seed, config.rules)?;

    // Lock-free fold/reduce: each thread accumulates its own stats, merged at the end
    let stats = (0..config.games)
        .into_par_iter()
        .fold(TournamentStats::default, |mut local, i| {
            let seed = config.seed.wrapping_add(i);
            match run_game(seed, config) {
                Ok(report) => {
                    on_game(&report);
                    local.add_result(&report);
                }
                Err(e) => {
                    warn!(seed, error = %e, "game failed");
                    local.failed += 1;
                }
            }
            local
        })
        .reduce(TournamentStats::default, |mut a, b| {
            a.merge(&b);
            a
        });

    Ok(stats)
}

/// Tournament statistics for aggregated results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentStats {
    /// Games that produced a report.
    pub games_played: u64,
    /// Wins per faction, in [`Faction::ALL`] order.
    pub wins: [u64; 3],
    /// Games abandoned at the turn limit.
    pub unfinished: u64,
    /// Games that failed to run.
    pub failed: u64,
    /// Total turns across all games.
    pub total_turns: u64,
    /// Longest game, in turns.
    pub longest: u32,
}

impl TournamentStats {
    /// Add a game result to the stats.
    pub fn add_result(&mut self, report: &GameReport) {
        self.games_played += 1;
        self.total_turns += u64::from(report.turns);
        self.longest = self.longest.max(report.turns);

        match report.winner {
            Some(faction) => self.wins[Self::slot(faction)] += 1,
            None => self.unfinished += 1,
        }
    }

    /// Merge another set of stats into this one.
    pub fn merge(&mut self, other: &TournamentStats) {
        self.games_played += other.games_played;
        for (mine, theirs) in self.wins.iter_mut().zip(other.wins) {
            *mine += theirs;
        }
        self.unfinished += other.unfinished;
        self.failed += other.failed;
        self.total_turns += other.total_turns;
        self.longest = self.longest.max(other.longest);
    }

    /// Wins recorded for a faction.
    #[must_use]
    pub const fn wins_for(&self, faction: Faction) -> u64 {
        self.wins[Self::slot(faction)]
    }

    /// Share of played games won by a faction (0.0-1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn win_rate(&self, faction: Faction) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.wins_for(faction) as f64 / self.games_played as f64
    }

    /// Mean game length in turns.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_turns(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_turns as f64 / self.games_played as f64
    }

    const fn slot(faction: Faction) -> usize {
        match faction {
            Faction::Law => 0,
            Faction::Outlaws => 1,
            Faction::Renegade => 2,
        }
    }
}
