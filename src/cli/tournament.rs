//! Tournament command implementation.

use std::path::PathBuf;
use std::time::Instant;

use bang::BotKind;
use bang::tournament::{TournamentConfig, run_tournament};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use super::output::{
    JsonTournamentResult, format_report, format_tournament_csv, format_tournament_text,
};
use super::{CliError, TournamentFormat, load_rules, resolve_seed};

/// Options for the tournament command.
#[derive(Debug)]
pub(crate) struct TournamentOptions {
    pub(crate) players: usize,
    pub(crate) bot: BotKind,
    pub(crate) games: u64,
    pub(crate) seed: Option<u64>,
    pub(crate) threads: Option<usize>,
    pub(crate) max_turns: Option<u32>,
    pub(crate) rules: Option<PathBuf>,
    pub(crate) format: TournamentFormat,
    pub(crate) progress: bool,
}

/// Execute the tournament command.
///
/// # Errors
///
/// Returns an error if the tournament fails.
pub(crate) fn execute(options: TournamentOptions) -> Result<(), CliError> {
    // Set thread pool size if specified
    if let Some(num_threads) = options.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let mut config = TournamentConfig {
        players: options.players,
        games: options.games,
        seed: resolve_seed(options.seed),
        bot: options.bot,
        rules: load_rules(options.rules.as_deref())?,
        ..TournamentConfig::default()
    };
    if let Some(t) = options.max_turns {
        config.max_turns = t;
    }

    // Progress bar
    let pb = if options.progress {
        let pb = ProgressBar::new(options.games);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games ({per_sec})",
                )
                .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let stats = run_tournament(&config, |report| {
        debug!("{}", format_report(report));
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    })?;

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();

    // Calculate games per second
    #[allow(clippy::cast_precision_loss)]
    let games_per_sec = if duration.as_secs_f64() > 0.0 {
        stats.games_played as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    let bot = options.bot.name();

    // Output based on format
    match options.format {
        TournamentFormat::Text => {
            println!();
            print!("{}", format_tournament_text(&stats, config.players, bot));
            println!();
            println!(
                "Duration: {:.2}s ({games_per_sec:.0} games/sec)",
                duration.as_secs_f64()
            );
        }
        TournamentFormat::Json => {
            let json_result = JsonTournamentResult::from_stats(&stats, config.players, bot);
            println!("{}", serde_json::to_string_pretty(&json_result)?);
        }
        TournamentFormat::Csv => {
            print!("{}", format_tournament_csv(&stats));
        }
    }

    Ok(())
}
