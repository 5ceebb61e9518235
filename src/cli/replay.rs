//! Replay command implementation.

use std::path::Path;

use bang::{Recording, replay};

use super::output::{JsonGameResult, format_outcome};
use super::{CliError, OutputFormat};

/// Execute the replay command.
///
/// # Errors
///
/// Returns an error if the recording cannot be loaded or does not replay.
pub(crate) fn execute(path: &Path, format: OutputFormat) -> Result<(), CliError> {
    let recording = Recording::load(path)
        .map_err(|e| CliError::new(format!("Failed to load {}: {e}", path.display())))?;
    let transcript = replay(&recording)?;

    match format {
        OutputFormat::Text => {
            print!("{}", transcript.render());
            println!();
            print!("{}", format_outcome(recording.seed, transcript.outcome.as_ref()));
        }
        OutputFormat::Json => {
            let json_result =
                JsonGameResult::from_transcript(recording.seed, recording.players, &transcript);
            println!("{}", serde_json::to_string_pretty(&json_result)?);
        }
    }

    Ok(())
}
