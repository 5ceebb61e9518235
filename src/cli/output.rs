//! Output formatting utilities for CLI.

// Text rendering builds strings with format!; the allocations do not matter here
#![allow(clippy::format_push_string)]

use bang::game::Faction;
use bang::tournament::{GameReport, TournamentStats};
use bang::{Outcome, Transcript};
use serde::Serialize;

/// JSON-serializable game result.
#[derive(Debug, Serialize)]
pub(super) struct JsonGameResult<'a> {
    /// Random seed used.
    pub(super) seed: u64,
    /// Number of players.
    pub(super) players: usize,
    /// Winning faction (null if the game was cut short).
    pub(super) winner: Option<Faction>,
    /// Turns played (null if the game was cut short).
    pub(super) turns: Option<u32>,
    /// The full transcript.
    pub(super) transcript: &'a Transcript,
}

impl<'a> JsonGameResult<'a> {
    /// Create from a transcript.
    pub(super) fn from_transcript(seed: u64, players: usize, transcript: &'a Transcript) -> Self {
        Self {
            seed,
            players,
            winner: transcript.outcome.as_ref().map(|o| o.winner),
            turns: transcript.outcome.as_ref().map(|o| o.turns),
            transcript,
        }
    }
}

/// Format the end of a game as human-readable text.
pub(super) fn format_outcome(seed: u64, outcome: Option<&Outcome>) -> String {
    let mut output = String::new();

    output.push_str(&format!("Game Result (seed: {seed})\n"));
    match outcome {
        Some(outcome) => {
            output.push_str(&format!("  Winner: {}\n", outcome.winner.name()));
            output.push_str(&format!("  Turns: {}\n", outcome.turns));
            let survivors: Vec<_> = outcome
                .survivors
                .iter()
                .map(|id| bang::game::player_name(*id))
                .collect();
            output.push_str(&format!("  Survivors: {}\n", survivors.join(", ")));
        }
        None => output.push_str("  Winner: none (game cut short)\n"),
    }

    output
}

/// JSON-serializable tournament result.
#[derive(Debug, Serialize)]
pub(super) struct JsonTournamentResult {
    /// Players per game.
    players: usize,
    /// Bot at every seat.
    bot: String,
    /// Total games played.
    games_played: u64,
    /// Per-faction statistics.
    factions: Vec<JsonFactionResult>,
    /// Games abandoned at the turn limit.
    unfinished: u64,
    /// Games that failed to run.
    failed: u64,
    /// Average game length in turns.
    avg_turns: f64,
    /// Longest game in turns.
    longest: u32,
}

/// JSON-serializable per-faction tournament stats.
#[derive(Debug, Serialize)]
struct JsonFactionResult {
    /// Faction name.
    faction: Faction,
    /// Number of wins.
    wins: u64,
    /// Win rate (0.0-1.0).
    win_rate: f64,
}

impl JsonTournamentResult {
    /// Create from stats.
    pub(super) fn from_stats(stats: &TournamentStats, players: usize, bot: &str) -> Self {
        Self {
            players,
            bot: bot.to_string(),
            games_played: stats.games_played,
            factions: Faction::ALL
                .into_iter()
                .map(|faction| JsonFactionResult {
                    faction,
                    wins: stats.wins_for(faction),
                    win_rate: stats.win_rate(faction),
                })
                .collect(),
            unfinished: stats.unfinished,
            failed: stats.failed,
            avg_turns: stats.average_turns(),
            longest: stats.longest,
        }
    }
}

/// Format tournament stats as human-readable text.
#[allow(clippy::cast_precision_loss)]
pub(super) fn format_tournament_text(stats: &TournamentStats, players: usize, bot: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Tournament Results ({} games, {players} {bot} bots)\n",
        stats.games_played
    ));
    output.push_str("========================================\n\n");

    output.push_str("Win Rates:\n");
    for faction in Faction::ALL {
        output.push_str(&format!(
            "  {}: {:.1}% ({} wins)\n",
            faction.name(),
            stats.win_rate(faction) * 100.0,
            stats.wins_for(faction)
        ));
    }
    if stats.games_played > 0 {
        output.push_str(&format!(
            "  Unfinished: {} ({:.1}%)\n",
            stats.unfinished,
            (stats.unfinished as f64 / stats.games_played as f64) * 100.0
        ));
    }
    if stats.failed > 0 {
        output.push_str(&format!("  Failed: {}\n", stats.failed));
    }

    output.push_str(&format!(
        "\nAverage Game Length: {:.1} turns (longest {})\n",
        stats.average_turns(),
        stats.longest
    ));

    output
}

/// Format tournament stats as CSV.
pub(super) fn format_tournament_csv(stats: &TournamentStats) -> String {
    let mut output = String::new();

    // Header
    output.push_str("faction,wins,win_rate\n");

    // Data rows
    for faction in Faction::ALL {
        output.push_str(&format!(
            "{},{},{:.4}\n",
            faction.name(),
            stats.wins_for(faction),
            stats.win_rate(faction)
        ));
    }
    output.push_str(&format!("unfinished,{},\n", stats.unfinished));

    output
}

/// One-line summary of a finished tournament game, for verbose logs.
pub(super) fn format_report(report: &GameReport) -> String {
    match report.winner {
        Some(winner) => format!(
            "seed {}: {} after {} turns",
            report.seed,
            winner.name(),
            report.turns
        ),
        None => format!("seed {}: unfinished after {} turns", report.seed, report.turns),
    }
}
