//! Game recording and replay.
//!
//! Because Bang games are 100% deterministic, replay requires only:
//! - `seed: u64` - The random seed the game was dealt with
//! - `players` and `rules` - The table it was dealt at
//! - `turns` - The turn limit, for a game cut short
//! - `decisions` - Every answer given to the engine, in order
//!
//! No events are stored. Replaying feeds the decisions back to a freshly
//! dealt game and regenerates the events.

pub mod text;

pub use text::{render_decision, render_event};

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::driver::{Entry, Transcript};
use crate::error::GameError;
use crate::game::{Event, Game, Resume, Rules, Step};

/// Minimal recording - table, seed and decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    /// Random seed the game was dealt with.
    pub seed: u64,
    /// Number of players.
    pub players: usize,
    /// Rule constants.
    #[serde(default)]
    pub rules: Rules,
    /// Turns played before the game was cut short, if it was.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turns: Option<u32>,
    /// Answers to the engine's requests, in order.
    pub decisions: Vec<Resume>,
}

impl Recording {
    /// Create a recording with no decisions yet.
    #[must_use]
    pub fn new(seed: u64, players: usize, rules: Rules) -> Self {
        Self {
            seed,
            players,
            rules,
            turns: None,
            decisions: Vec::new(),
        }
    }

    /// Record the decisions of a driven game.
    ///
    /// A transcript without an outcome was cut at a turn limit; the number of
    /// turns it played is kept so replay stops at the same point.
    #[must_use]
    pub fn from_transcript(seed: u64, players: usize, rules: Rules, transcript: &Transcript) -> Self {
        let turns = transcript
            .outcome
            .is_none()
            .then(|| u32::try_from(transcript.turns()).unwrap_or(u32::MAX));
        Self {
            turns,
            decisions: transcript.decisions(),
            ..Self::new(seed, players, rules)
        }
    }

    /// Save recording to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), ReplayError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load recording from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a recording.
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Error type for replay operations.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// Reading or writing the recording failed.
    #[error("recording I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The recording is not valid JSON for a recording.
    #[error("malformed recording: {0}")]
    Json(#[from] serde_json::Error),
    /// The recorded table cannot be dealt.
    #[error(transparent)]
    Game(#[from] GameError),
    /// The engine rejected a recorded decision.
    #[error("replay diverged at decision {index}: {source}")]
    Diverged {
        /// Position of the rejected decision.
        index: usize,
        /// Why the engine rejected it.
        source: GameError,
    },
}

/// Re-run a recorded game.
///
/// Stops at game over, at the recorded turn limit, or when the decisions
/// run out (the transcript then has no outcome). Decisions left over after
/// game over are ignored.
///
/// # Errors
///
/// Returns [`ReplayError::Game`] if the table cannot be dealt and
/// [`ReplayError::Diverged`] if the engine rejects a decision.
pub fn replay(recording: &Recording) -> Result<Transcript, ReplayError> {
    let mut game = Game::with_rules(recording.players, recording.seed, recording.rules)?;
    let mut decisions = recording.decisions.iter().cloned().enumerate();
    let mut transcript = Transcript::default();
    let mut value = Resume::Continue;
    let mut index = 0;
    let mut turns = 0u32;

    loop {
        let step = game
            .resume(value)
            .map_err(|source| ReplayError::Diverged { index, source })?;

        match step {
            Step::Event(event) => {
                if matches!(event, Event::TurnStarted { .. }) {
                    if recording.turns.is_some_and(|max| turns >= max) {
                        debug!(turns, "recorded turn limit reached");
                        return Ok(transcript);
                    }
                    turns += 1;
                }
                transcript.entries.push(Entry::Event(event));
                value = Resume::Continue;
            }
            Step::Request(_) => {
                let Some((next, decision)) = decisions.next() else {
                    debug!(decisions = recording.decisions.len(), "recording ran out");
                    return Ok(transcript);
                };
                index = next;
                transcript.entries.push(Entry::Decision(decision.clone()));
                value = decision;
            }
            Step::Finished(outcome) => {
                transcript.outcome = Some(outcome);
                return Ok(transcript);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::FirstChoice;
    use crate::driver::drive;
    use crate::game::{Action, Request};

    #[test]
    fn test_replay_reproduces_transcript() {
        let mut game = Game::new(3, 0).unwrap();
        let transcript = drive(&mut game, &mut FirstChoice).unwrap();
        let recording = Recording::from_transcript(0, 3, Rules::default(), &transcript);

        assert_eq!(replay(&recording).unwrap(), transcript);
    }

    #[test]
    fn test_short_recording_has_no_outcome() {
        let recording = Recording::new(0, 3, Rules::default());
        let transcript = replay(&recording).unwrap();

        assert!(transcript.outcome.is_none());
        assert!(transcript.decisions().is_empty());
        assert!(transcript.turns() >= 1);
    }

    #[test]
    fn test_wrong_decision_diverges() {
        let mut game = Game::new(3, 0).unwrap();
        let mut step = game.resume(Resume::Continue).unwrap();
        while let Step::Event(_) = step {
            step = game.resume(Resume::Continue).unwrap();
        }
        assert!(matches!(step, Step::Request(Request::ChooseDice { .. })));

        let mut recording = Recording::new(0, 3, Rules::default());
        recording.decisions.push(Resume::Action(Action::Gatlings));
        let err = replay(&recording).unwrap_err();
        assert!(matches!(err, ReplayError::Diverged { index: 0, .. }));
    }

    #[test]
    fn test_bad_table_is_rejected() {
        let recording = Recording::new(0, 12, Rules::default());
        assert!(matches!(
            replay(&recording),
            Err(ReplayError::Game(GameError::InvalidPlayerCount { count: 12 }))
        ));
    }
}
