//! Run command implementation.

use std::path::PathBuf;

use bang::{BotKind, Game, Recording, Table, drive_for};

use super::output::{JsonGameResult, format_outcome};
use super::{CliError, OutputFormat, load_rules, resolve_seed};

/// Options for the run command.
#[derive(Debug)]
pub(crate) struct RunOptions {
    pub(crate) players: usize,
    pub(crate) bot: BotKind,
    pub(crate) seed: Option<u64>,
    pub(crate) turns: Option<u32>,
    pub(crate) rules: Option<PathBuf>,
    pub(crate) format: OutputFormat,
    pub(crate) save: Option<PathBuf>,
    pub(crate) quiet: bool,
}

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the game cannot be dealt or the recording not saved.
pub(crate) fn execute(options: RunOptions) -> Result<(), CliError> {
    let rules = load_rules(options.rules.as_deref())?;
    let seed = resolve_seed(options.seed);

    let mut game = Game::with_rules(options.players, seed, rules)?;
    let mut table = Table::of(options.bot, options.players, seed);
    let transcript = drive_for(&mut game, &mut table, options.turns)?;

    // Save recording if requested
    if let Some(save_path) = &options.save {
        let recording = Recording::from_transcript(seed, options.players, rules, &transcript);
        recording
            .save(save_path)
            .map_err(|e| CliError::new(format!("Failed to save recording: {e}")))?;
        if !options.quiet && options.format == OutputFormat::Text {
            println!("Recording saved to: {}", save_path.display());
            println!();
        }
    }

    // Output based on format
    match options.format {
        OutputFormat::Text => {
            if !options.quiet {
                println!(
                    "Running game with seed {seed} ({} {} bots)...",
                    options.players, options.bot
                );
                println!();
                print!("{}", transcript.render());
                println!();
            }
            print!("{}", format_outcome(seed, transcript.outcome.as_ref()));
        }
        OutputFormat::Json => {
            let json_result = JsonGameResult::from_transcript(seed, options.players, &transcript);
            println!("{}", serde_json::to_string_pretty(&json_result)?);
        }
    }

    Ok(())
}
