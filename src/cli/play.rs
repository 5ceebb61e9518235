//! Play command implementation: a console game.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use bang::game::Face;
use bang::replay::render_event;
use bang::{Action, Actor, Event, Game, GameState, PlayerId, Pool, Recording, drive};

use super::{CliError, load_rules, resolve_seed};

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the game cannot be dealt or the recording not saved.
pub(crate) fn execute(
    players: usize,
    seed: Option<u64>,
    rules: Option<PathBuf>,
    save: Option<PathBuf>,
) -> Result<(), CliError> {
    let rules = load_rules(rules.as_deref())?;
    let seed = resolve_seed(seed);
    let mut game = Game::with_rules(players, seed, rules)?;

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    let transcript = drive(&mut game, &mut console)?;

    if let Some(outcome) = &transcript.outcome {
        println!("{} won after {} turns", outcome.winner.name(), outcome.turns);
    }

    if let Some(save_path) = save {
        let recording = Recording::from_transcript(seed, players, rules, &transcript);
        recording
            .save(&save_path)
            .map_err(|e| CliError::new(format!("Failed to save recording: {e}")))?;
        println!("Recording saved to: {}", save_path.display());
    }

    Ok(())
}

/// An actor that prints events and asks a human for every decision.
///
/// Unparseable answers are asked again. Once input runs out every request
/// gets the first option, so a piped game still finishes.
#[derive(Debug)]
struct Console<R, W> {
    input: R,
    output: W,
    exhausted: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            exhausted: false,
        }
    }

    /// Print a prompt and read one trimmed line, or `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Option<String> {
        if self.exhausted {
            return None;
        }
        write!(self.output, "{prompt}").ok();
        self.output.flush().ok();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                self.exhausted = true;
                None
            }
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Ask until the answer is an index into `len` options.
    fn ask_index(&mut self, prompt: &str, len: usize) -> usize {
        loop {
            let Some(answer) = self.ask(prompt) else {
                return 0;
            };
            if let Ok(i) = answer.parse::<usize>()
                && i < len
            {
                return i;
            }
        }
    }
}

/// The dice named by `keys`, one die per key, never more than `dice` holds.
fn parse_reroll(keys: &str, dice: &Pool) -> Pool {
    let mut chosen = Pool::new();
    for face in keys.chars().filter_map(Face::from_key) {
        if chosen.count(face) < dice.count(face) {
            chosen.insert(face, 1);
        }
    }
    chosen
}

/// `[a]rrow: 2, [b]eer: 1, [1]: 1` style listing of rerollable dice.
fn dice_menu(dice: &Pool) -> String {
    dice.iter()
        .map(|(face, count)| {
            let rest = face.name().strip_prefix(face.key()).unwrap_or(face.name());
            format!("[{}]{rest}: {count}", face.key())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl<R: BufRead + std::fmt::Debug, W: Write + std::fmt::Debug> Actor for Console<R, W> {
    fn observe(&mut self, event: &Event, _state: &GameState) {
        writeln!(self.output, "{}", render_event(event)).ok();
    }

    fn choose_dice(&mut self, _state: &GameState, dice: &Pool) -> Pool {
        writeln!(self.output, "{}", dice_menu(dice)).ok();
        self.ask("reroll: ")
            .map(|keys| parse_reroll(&keys, dice))
            .unwrap_or_default()
    }

    fn choose_action(&mut self, _state: &GameState, actions: &[Action]) -> Action {
        for (i, action) in actions.iter().enumerate() {
            writeln!(self.output, "[{i}] {action}").ok();
        }
        actions[self.ask_index("action: ", actions.len())]
    }

    fn choose_player(&mut self, state: &GameState, players: &[PlayerId]) -> PlayerId {
        for (i, &id) in players.iter().enumerate() {
            if let Some(player) = state.player(id) {
                writeln!(self.output, "[{i}] {} ({})", player.name, player.life()).ok();
            }
        }
        players[self.ask_index("player: ", players.len())]
    }
}
