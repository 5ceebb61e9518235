//! Bang CLI - Command-line interface for playing and simulating Bang games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use bang::BotKind;
use clap::{Parser, Subcommand};

/// Bang - A deterministic Bang! dice game engine
#[derive(Parser, Debug)]
#[command(name = "bang")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a game at the console, answering every request yourself
    Play {
        /// Number of players (3-8)
        #[arg(short = 'n', long, default_value = "3")]
        players: usize,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Rules file (JSON) overriding the default constants
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Save recording to file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Run a single game between bots
    Run {
        /// Number of players (3-8)
        #[arg(short = 'n', long, default_value = "5")]
        players: usize,

        /// Bot at every seat
        #[arg(short, long, default_value = "random")]
        bot: BotKind,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Maximum turns (default: unlimited)
        #[arg(short, long)]
        turns: Option<u32>,

        /// Rules file (JSON) overriding the default constants
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Save recording to file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Only print the result
        #[arg(short, long)]
        quiet: bool,
    },

    /// Replay a recorded game
    Replay {
        /// Recording file (.json)
        #[arg(required = true)]
        recording: PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Run mass parallel games and aggregate statistics
    Tournament {
        /// Number of players per game (3-8)
        #[arg(short = 'n', long, default_value = "5")]
        players: usize,

        /// Bot at every seat
        #[arg(short, long, default_value = "random")]
        bot: BotKind,

        /// Number of games to run (default: 1000)
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Starting seed (increments for each game)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Maximum turns per game (default: 1000)
        #[arg(short = 't', long)]
        max_turns: Option<u32>,

        /// Rules file (JSON) overriding the default constants
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::TournamentFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match args.command {
        Commands::Play {
            players,
            seed,
            rules,
            save,
        } => cli::play::execute(players, seed, rules, save),

        Commands::Run {
            players,
            bot,
            seed,
            turns,
            rules,
            format,
            save,
            quiet,
        } => cli::run::execute(cli::run::RunOptions {
            players,
            bot,
            seed,
            turns,
            rules,
            format,
            save,
            quiet,
        }),

        Commands::Replay { recording, format } => cli::replay::execute(&recording, format),

        Commands::Tournament {
            players,
            bot,
            games,
            seed,
            threads,
            max_turns,
            rules,
            format,
            progress,
        } => cli::tournament::execute(cli::tournament::TournamentOptions {
            players,
            bot,
            games,
            seed,
            threads,
            max_turns,
            rules,
            format,
            progress,
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
