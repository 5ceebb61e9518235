//! Vocabulary of the suspend/resume protocol.
//!
//! The engine talks to the outside world only through these types: it emits
//! [`Event`]s to observe and [`Request`]s to answer, and is resumed with a
//! [`Resume`] value each time.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::{Action, Faction, PlayerId, Pool, Role};

/// Public facts about a seat, announced when the game starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Seat identity.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Dealt role.
    pub role: Role,
}

/// Something that happened. Resume with [`Resume::Continue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// The game began with these seats.
    GameStarted {
        /// Every seat in turn order.
        players: Vec<Seat>,
    },
    /// A player's turn began.
    TurnStarted {
        /// Whose turn it is.
        player: PlayerId,
    },
    /// Fresh dice were rolled.
    DiceRolled {
        /// Only the dice rolled just now.
        dice: Pool,
    },
    /// Too much dynamite blew up on a player.
    Dynamites {
        /// The player who rolled it.
        player: PlayerId,
    },
    /// The arrow pile ran dry.
    IndianAttack,
    /// A player died and left the table.
    Died {
        /// The dead player.
        player: PlayerId,
    },
}

/// A decision the engine is waiting for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Request {
    /// Pick dice to reroll (answer with a sub-pool, possibly empty).
    ChooseDice {
        /// The dice eligible for a reroll.
        dice: Pool,
    },
    /// Pick one action to resolve.
    ChooseAction {
        /// Every action the pool can pay for.
        actions: Vec<Action>,
    },
    /// Pick one player as the target of the current action.
    ChoosePlayer {
        /// Eligible targets.
        players: Vec<PlayerId>,
    },
}

impl Request {
    /// The kind of this request.
    #[must_use]
    pub const fn kind(&self) -> RequestKind {
        match self {
            Request::ChooseDice { .. } => RequestKind::ChooseDice,
            Request::ChooseAction { .. } => RequestKind::ChooseAction,
            Request::ChoosePlayer { .. } => RequestKind::ChoosePlayer,
        }
    }

    /// Whether `answer` satisfies this request.
    #[must_use]
    pub fn accepts(&self, answer: &Resume) -> bool {
        match (self, answer) {
            (Request::ChooseDice { dice }, Resume::Dice(chosen)) => dice.contains(chosen),
            (Request::ChooseAction { actions }, Resume::Action(action)) => {
                actions.contains(action)
            }
            (Request::ChoosePlayer { players }, Resume::Player(player)) => {
                players.contains(player)
            }
            _ => false,
        }
    }
}

/// Kinds of [`Request`], for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    /// See [`Request::ChooseDice`].
    ChooseDice,
    /// See [`Request::ChooseAction`].
    ChooseAction,
    /// See [`Request::ChoosePlayer`].
    ChoosePlayer,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::ChooseDice => f.write_str("choose-dice"),
            RequestKind::ChooseAction => f.write_str("choose-action"),
            RequestKind::ChoosePlayer => f.write_str("choose-player"),
        }
    }
}

/// The value the engine is resumed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resume {
    /// Acknowledge an event (also used to start the game).
    Continue,
    /// Answer to [`Request::ChooseDice`].
    Dice(Pool),
    /// Answer to [`Request::ChooseAction`].
    Action(Action),
    /// Answer to [`Request::ChoosePlayer`].
    Player(PlayerId),
}

impl Resume {
    /// The kind of request this value answers, if any.
    #[must_use]
    pub const fn kind(&self) -> Option<RequestKind> {
        match self {
            Resume::Continue => None,
            Resume::Dice(_) => Some(RequestKind::ChooseDice),
            Resume::Action(_) => Some(RequestKind::ChooseAction),
            Resume::Player(_) => Some(RequestKind::ChoosePlayer),
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// The side that won.
    pub winner: Faction,
    /// Turns played.
    pub turns: u32,
    /// Players still alive, in seating order.
    pub survivors: Vec<PlayerId>,
}

/// What the engine produced after being resumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// Observe and resume with [`Resume::Continue`].
    Event(Event),
    /// Answer before the engine can proceed.
    Request(Request),
    /// The game is over; further resumes repeat this.
    Finished(Outcome),
}
