//! Decision makers that answer the engine's requests.
//!
//! An [`Actor`] sees every event and answers every request of a game. The
//! bots here cover the table for tests, tournaments and the CLI; the
//! console player lives in the binary.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::game::{Action, Event, Face, GameState, PlayerId, Pool, Rng, Role};

/// Something that answers the engine's requests.
///
/// The offered lists are never empty, and the answer must come from them:
/// the engine rejects anything else.
pub trait Actor: fmt::Debug {
    /// See an event. The state may already be ahead of it, since the engine
    /// runs to its next request before handing out buffered events.
    fn observe(&mut self, _event: &Event, _state: &GameState) {}

    /// Pick dice to reroll out of `dice`. An empty pool stops rerolling.
    fn choose_dice(&mut self, state: &GameState, dice: &Pool) -> Pool;

    /// Pick the next action to resolve.
    fn choose_action(&mut self, state: &GameState, actions: &[Action]) -> Action;

    /// Pick the target of the action being resolved.
    fn choose_player(&mut self, state: &GameState, players: &[PlayerId]) -> PlayerId;
}

/// Never rerolls and always takes the first option.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChoice;

impl Actor for FirstChoice {
    fn choose_dice(&mut self, _state: &GameState, _dice: &Pool) -> Pool {
        Pool::new()
    }

    fn choose_action(&mut self, _state: &GameState, actions: &[Action]) -> Action {
        actions[0]
    }

    fn choose_player(&mut self, _state: &GameState, players: &[PlayerId]) -> PlayerId {
        players[0]
    }
}

/// Uniformly random choices from its own seeded source.
#[derive(Debug, Clone, Copy)]
pub struct RandomActor {
    rng: Rng,
}

impl RandomActor {
    /// Create a random actor.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            rng: Rng::new(seed),
        }
    }
}

impl Actor for RandomActor {
    fn choose_dice(&mut self, _state: &GameState, dice: &Pool) -> Pool {
        dice.dice().filter(|_| self.rng.coin()).collect()
    }

    fn choose_action(&mut self, _state: &GameState, actions: &[Action]) -> Action {
        actions[self.rng.below(actions.len())]
    }

    fn choose_player(&mut self, _state: &GameState, players: &[PlayerId]) -> PlayerId {
        players[self.rng.below(players.len())]
    }
}

/// A bot that plays the roles: it shoots enemies and patches up friends.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cautious {
    resolving: Option<Action>,
}

impl Cautious {
    fn is_friend(me: Role, other: Role) -> bool {
        !me.is_hostile_to(other)
    }
}

impl Actor for Cautious {
    fn choose_dice(&mut self, _state: &GameState, dice: &Pool) -> Pool {
        let mut chosen = dice.filter(|face| face == Face::Arrow);
        if dice.count(Face::Gatling) < 3 {
            chosen.insert(Face::Gatling, dice.count(Face::Gatling));
        }
        chosen
    }

    fn choose_action(&mut self, state: &GameState, actions: &[Action]) -> Action {
        let hurt = state.current_player().damage > 0;
        let preferred = actions
            .iter()
            .copied()
            .find(|&action| action == Action::Beer && hurt)
            .or_else(|| actions.iter().copied().find(|&a| a == Action::Gatlings));

        let action = preferred.unwrap_or(actions[0]);
        self.resolving = Some(action);
        action
    }

    fn choose_player(&mut self, state: &GameState, players: &[PlayerId]) -> PlayerId {
        let me = state.current_player();
        let candidates = players.iter().filter_map(|&id| state.player(id));

        let pick = if self.resolving == Some(Action::Beer) {
            // Most hurt friend, ourselves included
            candidates
                .filter(|p| p.id == me.id || Self::is_friend(me.role, p.role))
                .filter(|p| p.damage > 0)
                .min_by_key(|p| (p.life(), p.id))
        } else {
            // Weakest enemy
            candidates
                .filter(|p| p.id != me.id && me.role.is_hostile_to(p.role))
                .min_by_key(|p| (p.life(), p.id))
        };

        pick.map_or_else(
            || {
                players
                    .iter()
                    .copied()
                    .find(|&id| id != me.id)
                    .unwrap_or(players[0])
            },
            |p| p.id,
        )
    }
}

const SEAT_SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// One actor per seat; each request goes to the current player's actor.
#[derive(Debug, Default)]
pub struct Table {
    seats: Vec<Box<dyn Actor>>,
}

impl Table {
    /// Seat actors in player id order.
    #[must_use]
    pub fn new(seats: Vec<Box<dyn Actor>>) -> Self {
        Self { seats }
    }

    /// The same kind of bot at every seat, each with its own seed.
    #[must_use]
    pub fn of(kind: BotKind, players: usize, seed: u64) -> Self {
        Self::new(
            (0..players as u64)
                .map(|seat| kind.build(Self::seat_seed(seed, seat)))
                .collect(),
        )
    }

    /// Seed of the bot at `seat` in a game dealt from `seed`.
    ///
    /// Mixed so that no bot draws from the same stream as the game's dice.
    #[must_use]
    pub const fn seat_seed(seed: u64, seat: u64) -> u64 {
        (seed ^ SEAT_SEED_MIX).wrapping_add(seat)
    }

    fn seat(&mut self, state: &GameState) -> Option<&mut Box<dyn Actor>> {
        self.seats.get_mut(usize::from(state.current()))
    }
}

impl Actor for Table {
    fn observe(&mut self, event: &Event, state: &GameState) {
        for seat in &mut self.seats {
            seat.observe(event, state);
        }
    }

    fn choose_dice(&mut self, state: &GameState, dice: &Pool) -> Pool {
        match self.seat(state) {
            Some(actor) => actor.choose_dice(state, dice),
            None => FirstChoice.choose_dice(state, dice),
        }
    }

    fn choose_action(&mut self, state: &GameState, actions: &[Action]) -> Action {
        match self.seat(state) {
            Some(actor) => actor.choose_action(state, actions),
            None => FirstChoice.choose_action(state, actions),
        }
    }

    fn choose_player(&mut self, state: &GameState, players: &[PlayerId]) -> PlayerId {
        match self.seat(state) {
            Some(actor) => actor.choose_player(state, players),
            None => FirstChoice.choose_player(state, players),
        }
    }
}

/// Built-in bots, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BotKind {
    /// [`FirstChoice`].
    First,
    /// [`RandomActor`].
    #[default]
    Random,
    /// [`Cautious`].
    Cautious,
}

impl BotKind {
    /// Build a bot of this kind. Only random bots use the seed.
    #[must_use]
    pub fn build(self, seed: u64) -> Box<dyn Actor> {
        match self {
            BotKind::First => Box::new(FirstChoice),
            BotKind::Random => Box::new(RandomActor::new(seed)),
            BotKind::Cautious => Box::new(Cautious::default()),
        }
    }

    /// Lower-case name, as accepted on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BotKind::First => "first",
            BotKind::Random => "random",
            BotKind::Cautious => "cautious",
        }
    }
}

impl fmt::Display for BotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
