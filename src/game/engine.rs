//! The turn/resolution engine.
//!
//! A turn is a chain of nested procedures (roll, reroll loop, resolve loop,
//! action effect, damage) that may each need a decision from outside. The
//! engine runs that chain eagerly until it reaches a decision point, parks
//! the rest of the turn in a [`Phase`], and hands back the buffered events
//! followed by the request, one [`Step`] per [`Game::resume`] call.
//!
//! Turns never run ahead of the caller: a turn is announced with
//! `TurnStarted` and only rolled once that event has been acknowledged.
//!
//! Any procedure may end the turn early when the current player dies or the
//! game is decided. That travels up as the `Err(TurnEnded)` arm of [`Flow`]
//! through `?`, so every mutation made before it stands.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::error::{GameError, GameResult};
use crate::game::invariants::assert_invariants;
use crate::game::{
    Action, DYNAMITE_LIMIT, Event, Face, GameState, PlayerId, Pool, Request, Resume, Rules, Step,
};

/// The current turn was cut short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TurnEnded;

/// Result of a turn procedure: `Err(TurnEnded)` skips the rest of the turn.
pub(crate) type Flow<T = ()> = Result<T, TurnEnded>;

/// Where the engine is parked.
#[derive(Debug, Clone)]
enum Phase {
    /// Nothing has been emitted yet.
    Setup,
    /// A turn has been announced but no dice are rolled yet.
    Opening,
    /// Waiting for dice to reroll.
    Reroll {
        /// Dice on the table.
        pool: Pool,
        /// Rerolls already taken this turn.
        round: u32,
    },
    /// Waiting for an action to resolve.
    Resolve {
        /// Dice on the table.
        pool: Pool,
        /// What the dice can pay for.
        actions: Vec<Action>,
    },
    /// Waiting for the target of an action.
    Target {
        /// Dice on the table, still including the action's cost.
        pool: Pool,
        /// The action being resolved.
        action: Action,
        /// Eligible targets.
        candidates: Vec<PlayerId>,
    },
    /// The game is decided.
    Finished(crate::game::Outcome),
}

impl Phase {
    /// The request this phase is waiting on, if any.
    fn request(&self) -> Option<Request> {
        match self {
            Phase::Reroll { pool, .. } => Some(Request::ChooseDice {
                dice: pool.filter(Face::is_rerollable),
            }),
            Phase::Resolve { actions, .. } => Some(Request::ChooseAction {
                actions: actions.clone(),
            }),
            Phase::Target { candidates, .. } => Some(Request::ChoosePlayer {
                players: candidates.clone(),
            }),
            Phase::Setup | Phase::Opening | Phase::Finished(_) => None,
        }
    }
}

/// A resumable game.
///
/// Drive it by calling [`Game::resume`] repeatedly: start with
/// [`Resume::Continue`], acknowledge every [`Step::Event`] with
/// [`Resume::Continue`], and answer every [`Step::Request`] with a matching
/// value. Invalid answers are rejected without touching the game.
#[derive(Debug, Clone)]
pub struct Game {
    pub(super) state: GameState,
    pub(super) pending: VecDeque<Event>,
    phase: Phase,
    awaiting: bool,
}

impl Game {
    /// Deal a game with the default rules.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPlayerCount`] outside 3-8 players.
    pub fn new(players: usize, seed: u64) -> GameResult<Self> {
        Self::with_rules(players, seed, Rules::default())
    }

    /// Deal a game with custom rule constants.
    ///
    /// # Errors
    ///
    /// Returns an error for an unsupported player count or invalid rules.
    pub fn with_rules(players: usize, seed: u64, rules: Rules) -> GameResult<Self> {
        Ok(Self::from_state(GameState::new(players, seed, rules)?))
    }

    /// Start a game from a prepared state.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            pending: VecDeque::new(),
            phase: Phase::Setup,
            awaiting: false,
        }
    }

    /// The game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The request the engine is blocked on, once it has been emitted.
    #[must_use]
    pub fn pending_request(&self) -> Option<Request> {
        if self.awaiting {
            self.phase.request()
        } else {
            None
        }
    }

    /// Whether the game has been decided.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Resume the engine and run it to its next step.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidResume`] when the answer does not satisfy
    /// the pending request, and [`GameError::UnexpectedResume`] when a
    /// decision is supplied while no request is pending. Either way the game
    /// is unchanged and the same request is still pending.
    pub fn resume(&mut self, value: Resume) -> GameResult<Step> {
        if self.awaiting {
            let flow = self.answer(value)?;
            self.awaiting = false;
            self.phase = self.settle(flow);
        } else if value != Resume::Continue {
            return Err(GameError::UnexpectedResume);
        }

        Ok(self.emit())
    }

    /// Hand out the next buffered event, or the parked request.
    fn emit(&mut self) -> Step {
        if matches!(self.phase, Phase::Setup) {
            self.pending.push_back(Event::GameStarted {
                players: self.state.seats(),
            });
            self.phase = self.next_turn();
        }

        loop {
            if let Some(event) = self.pending.pop_front() {
                return Step::Event(event);
            }

            match &self.phase {
                Phase::Finished(outcome) => return Step::Finished(outcome.clone()),
                Phase::Opening => {
                    let flow = self.open_turn();
                    self.phase = self.settle(flow);
                }
                _ => break,
            }
        }

        match self.phase.request() {
            Some(request) => {
                self.awaiting = true;
                Step::Request(request)
            }
            None => unreachable!("only parked phases reach the request"),
        }
    }

    /// Feed an answer into the parked phase.
    fn answer(&mut self, value: Resume) -> GameResult<Flow<Option<Phase>>> {
        let Some(request) = self.phase.request() else {
            return Err(GameError::UnexpectedResume);
        };
        if !request.accepts(&value) {
            let reason = if value.kind() == Some(request.kind()) {
                "the answer was not among the offered choices"
            } else {
                "the answer is of the wrong kind"
            };
            return Err(GameError::InvalidResume {
                expected: request.kind(),
                reason,
            });
        }

        let phase = std::mem::replace(&mut self.phase, Phase::Setup);
        let flow = match (phase, value) {
            (Phase::Reroll { pool, round }, Resume::Dice(chosen)) => {
                self.reroll(pool, round, &chosen)
            }
            (Phase::Resolve { pool, .. }, Resume::Action(action)) => {
                self.start_action(pool, action)
            }
            (Phase::Target { pool, action, .. }, Resume::Player(target)) => {
                self.apply_effect(action, Some(target));
                self.finish_action(pool, action)
            }
            (phase, _) => {
                self.phase = phase;
                return Err(GameError::UnexpectedResume);
            }
        };
        Ok(flow)
    }

    /// Turn the result of a turn procedure into the next parked phase.
    fn settle(&mut self, flow: Flow<Option<Phase>>) -> Phase {
        match flow {
            Ok(Some(phase)) => phase,
            Ok(None) => {
                self.end_turn();
                self.next_turn()
            }
            Err(TurnEnded) => {
                debug!(player = self.state.current(), "turn ended early");
                self.end_turn();
                self.next_turn()
            }
        }
    }

    /// Announce the next turn, or finish the game if it is decided.
    fn next_turn(&mut self) -> Phase {
        if let Some(outcome) = self.state.outcome() {
            debug!(winner = ?outcome.winner, turns = outcome.turns, "game over");
            return Phase::Finished(outcome);
        }

        let player = self.state.current();
        debug!(player, turn = self.state.turn(), "turn started");
        self.pending.push_back(Event::TurnStarted { player });
        Phase::Opening
    }

    fn end_turn(&mut self) {
        self.state.advance_turn();
        assert_invariants(&self.state);
    }

    /// First roll of the turn.
    fn open_turn(&mut self) -> Flow<Option<Phase>> {
        let dice = self.state.rules().dice;
        let (pool, stop) = self.roll(&Pool::new(), dice)?;
        Ok(self.offer_reroll(pool, 0, stop))
    }

    /// Roll `n` dice next to `pool`, paying out arrows and dynamite.
    ///
    /// Returns the fresh dice and whether rerolling must stop. Dynamite
    /// counts the dice kept in `pool` plus the fresh ones.
    fn roll(&mut self, pool: &Pool, n: u32) -> Flow<(Pool, bool)> {
        let rolled = self.state.roll_dice(n);
        trace!(dice = %rolled, "rolled");
        self.pending.push_back(Event::DiceRolled {
            dice: rolled.clone(),
        });

        let current = self.state.current();
        self.give_arrows(current, rolled.count(Face::Arrow))?;

        let mut stop = false;
        if pool.count(Face::Dynamite) + rolled.count(Face::Dynamite) >= DYNAMITE_LIMIT {
            self.pending.push_back(Event::Dynamites { player: current });
            self.damage(current, 1);
            stop = true;
        }
        self.check_alive()?;

        Ok((rolled, stop))
    }

    fn offer_reroll(&self, pool: Pool, round: u32, stop: bool) -> Option<Phase> {
        if stop || round >= self.state.rules().rerolls {
            return Self::offer_actions(pool);
        }
        Some(Phase::Reroll { pool, round })
    }

    /// Reroll the chosen dice. An empty choice moves on to resolution.
    fn reroll(&mut self, mut pool: Pool, round: u32, chosen: &Pool) -> Flow<Option<Phase>> {
        if chosen.is_empty() {
            return Ok(Self::offer_actions(pool));
        }

        pool.remove(chosen);
        let (rolled, stop) = self.roll(&pool, chosen.size())?;
        pool.add(&rolled);
        Ok(self.offer_reroll(pool, round + 1, stop))
    }

    fn offer_actions(pool: Pool) -> Option<Phase> {
        let actions = Action::resolvable(&pool);
        if actions.is_empty() {
            return None;
        }
        Some(Phase::Resolve { pool, actions })
    }

    fn start_action(&mut self, pool: Pool, action: Action) -> Flow<Option<Phase>> {
        trace!(%action, "resolving");
        match self.targets(action) {
            Some(candidates) if !candidates.is_empty() => Ok(Some(Phase::Target {
                pool,
                action,
                candidates,
            })),
            Some(_) => self.finish_action(pool, action),
            None => {
                self.apply_effect(action, None);
                self.finish_action(pool, action)
            }
        }
    }

    /// Pay for a resolved action and look for the next one.
    fn finish_action(&mut self, mut pool: Pool, action: Action) -> Flow<Option<Phase>> {
        pool.remove(&action.required());
        self.check_alive()?;
        Ok(Self::offer_actions(pool))
    }

    /// End the turn if the current player is dead or the game is decided.
    pub(super) fn check_alive(&self) -> Flow {
        if self.state.current_player().is_dead() || self.state.is_game_over() {
            return Err(TurnEnded);
        }
        Ok(())
    }
}
