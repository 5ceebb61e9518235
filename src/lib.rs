// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Bang: a deterministic, resumable engine for the Bang! dice game.
//!
//! This crate provides a turn/resolution engine designed for:
//! - Bit-exact deterministic games from a seed and a list of decisions
//! - Driving by any decision maker through a suspend/resume protocol
//! - Fast parallel bot tournaments
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Tournament Runner / Replay        │
//! ├─────────────────────────────────────┤
//! │   Driver + Actors (bots, console)   │
//! ├─────────────────────────────────────┤
//! │   Game Engine (suspend/resume)      │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use bang::{FirstChoice, Game, drive};
//!
//! let mut game = Game::new(4, 42)?;
//! let transcript = drive(&mut game, &mut FirstChoice)?;
//! assert!(transcript.outcome.is_some());
//! # Ok::<(), bang::GameError>(())
//! ```

pub mod actor;
pub mod driver;
pub mod error;
pub mod game;
pub mod replay;
pub mod tournament;

pub use error::{GameError, GameResult};

// Re-export key types at crate root for convenience
pub use actor::{Actor, BotKind, Cautious, FirstChoice, RandomActor, Table};
pub use driver::{Entry, Transcript, drive, drive_for};
pub use game::{
    Action, Event, Face, Faction, Game, GameState, Outcome, Player, PlayerId, Pool, Request,
    Resume, Role, Rules, Step,
};
pub use replay::{Recording, ReplayError, replay};
