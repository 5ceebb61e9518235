//! Running a game against an actor.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::actor::Actor;
use crate::error::GameResult;
use crate::game::{Event, Game, GameState, Outcome, Request, Resume, Step};
use crate::replay::text::{render_decision, render_event};

/// One line of a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entry {
    /// The engine reported something.
    Event(Event),
    /// An actor answered a request.
    Decision(Resume),
}

/// Everything seen while driving a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Events and decisions in order.
    pub entries: Vec<Entry>,
    /// How the game ended, if it did.
    pub outcome: Option<Outcome>,
}

impl Transcript {
    /// The events alone.
    #[must_use = "iterators are lazy"]
    pub fn events(&self) -> impl Iterator<Item = &Event> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Event(event) => Some(event),
            Entry::Decision(_) => None,
        })
    }

    /// The decisions alone, ready to be recorded.
    #[must_use]
    pub fn decisions(&self) -> Vec<Resume> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Decision(decision) => Some(decision.clone()),
                Entry::Event(_) => None,
            })
            .collect()
    }

    /// Turns started.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.events()
            .filter(|event| matches!(event, Event::TurnStarted { .. }))
            .count()
    }

    /// Render as console text, one line per event or decision.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();
        for entry in &self.entries {
            match entry {
                Entry::Event(event) => output.push_str(&render_event(event)),
                Entry::Decision(decision) => output.push_str(&render_decision(decision)),
            }
            output.push('\n');
        }
        if let Some(outcome) = &self.outcome {
            output.push_str(&format!(
                "{} won after {} turns\n",
                outcome.winner.name(),
                outcome.turns
            ));
        }
        output
    }
}

/// Ask an actor to answer a request.
#[must_use]
pub fn decide(actor: &mut dyn Actor, state: &GameState, request: &Request) -> Resume {
    match request {
        Request::ChooseDice { dice } => Resume::Dice(actor.choose_dice(state, dice)),
        Request::ChooseAction { actions } => Resume::Action(actor.choose_action(state, actions)),
        Request::ChoosePlayer { players } => Resume::Player(actor.choose_player(state, players)),
    }
}

/// Play a game to the end.
///
/// # Errors
///
/// Returns the engine's error if the actor answers outside an offer.
pub fn drive(game: &mut Game, actor: &mut dyn Actor) -> GameResult<Transcript> {
    drive_for(game, actor, None)
}

/// Play a game until it ends or `max_turns` turns have started.
///
/// A game cut short yields a transcript without an outcome. It stops at the
/// announcement of the first turn past the limit, before any of that turn is
/// played, so the game state matches the transcript.
///
/// # Errors
///
/// Returns the engine's error if the actor answers outside an offer.
pub fn drive_for(
    game: &mut Game,
    actor: &mut dyn Actor,
    max_turns: Option<u32>,
) -> GameResult<Transcript> {
    let mut transcript = Transcript::default();
    let mut turns = 0u32;
    let mut value = Resume::Continue;

    loop {
        match game.resume(value)? {
            Step::Event(event) => {
                if matches!(event, Event::TurnStarted { .. }) {
                    if max_turns.is_some_and(|max| turns >= max) {
                        debug!(turns, "turn limit reached");
                        return Ok(transcript);
                    }
                    turns += 1;
                }
                actor.observe(&event, game.state());
                transcript.entries.push(Entry::Event(event));
                value = Resume::Continue;
            }
            Step::Request(request) => {
                let decision = decide(actor, game.state(), &request);
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
    use crate::actor::{BotKind, FirstChoice, RandomActor, Table};

    #[test]
    fn test_drive_reaches_an_outcome() {
        let mut game = Game::new(4, 11).unwrap();
        let transcript = drive(&mut game, &mut RandomActor::new(11)).unwrap();

        let outcome = transcript.outcome.clone().unwrap();
        assert!(game.is_finished());
        assert_eq!(outcome.survivors, game.state().seating());
        assert!(matches!(
            transcript.entries.first(),
            Some(Entry::Event(Event::GameStarted { .. }))
        ));
    }

    #[test]
    fn test_drive_for_stops_at_turn_limit() {
        let mut game = Game::new(5, 2).unwrap();
        let transcript = drive_for(&mut game, &mut FirstChoice, Some(2)).unwrap();

        assert!(transcript.turns() <= 2);
        if transcript.outcome.is_none() {
            assert_eq!(transcript.turns(), 2);
        }
    }

    #[test]
    fn test_same_seed_same_transcript() {
        let run = || {
            let mut game = Game::new(6, 77).unwrap();
            drive(&mut game, &mut Table::of(BotKind::Cautious, 6, 77)).unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_render_lists_every_entry() {
        let mut game = Game::new(3, 0).unwrap();
        let transcript = drive(&mut game, &mut FirstChoice).unwrap();
        let text = transcript.render();

        assert!(text.starts_with("Start\n"));
        assert!(text.lines().count() > transcript.entries.len());
        assert!(text.contains("won after"));
    }
}
