//! Multi-turn integration tests for the game engine.
//!
//! These tests drive whole games through the public suspend/resume protocol
//! and check what every request offers along the way.
//!
//! Run with: cargo test --release game_integration

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::cast_possible_truncation)]

use bang::game::check_invariants;
use bang::{
    Action, Actor, Entry, Event, Face, Faction, FirstChoice, Game, GameError, GameState,
    PlayerId, Pool, RandomActor, Request, Resume, Role, Step, drive, drive_for,
};

/// Wraps an actor and checks every request it is asked to answer.
#[derive(Debug)]
struct Auditor<A> {
    inner: A,
    resolving: Option<Action>,
    requests: usize,
    stopped_rolling: bool,
}

impl<A: Actor> Auditor<A> {
    fn new(inner: A) -> Self {
        Self {
            inner,
            resolving: None,
            requests: 0,
            stopped_rolling: false,
        }
    }

    fn audit(&mut self, state: &GameState) {
        self.requests += 1;
        assert!(check_invariants(state).is_empty(), "{:?}", check_invariants(state));
        assert!(state.is_alive(state.current()));
        assert!(!state.is_game_over());
    }
}

impl<A: Actor> Actor for Auditor<A> {
    fn observe(&mut self, event: &Event, state: &GameState) {
        match event {
            Event::TurnStarted { .. } => self.stopped_rolling = false,
            Event::Dynamites { .. } => self.stopped_rolling = true,
            _ => {}
        }
        self.inner.observe(event, state);
    }

    fn choose_dice(&mut self, state: &GameState, dice: &Pool) -> Pool {
        self.audit(state);
        assert!(!self.stopped_rolling, "reroll offered after dynamite");
        assert_eq!(dice.count(Face::Dynamite), 0);
        self.inner.choose_dice(state, dice)
    }

    fn choose_action(&mut self, state: &GameState, actions: &[Action]) -> Action {
        self.audit(state);
        assert!(!actions.is_empty());
        let action = self.inner.choose_action(state, actions);
        self.resolving = Some(action);
        action
    }

    fn choose_player(&mut self, state: &GameState, players: &[PlayerId]) -> PlayerId {
        self.audit(state);
        assert!(!players.is_empty());
        assert!(players.iter().all(|&id| state.is_alive(id)));
        match self.resolving {
            Some(Action::Beer) => assert_eq!(players, state.seating()),
            Some(Action::Shoot { distance }) => {
                assert_eq!(players, state.players_by_distance(usize::from(distance)));
            }
            other => panic!("player requested while resolving {other:?}"),
        }
        self.inner.choose_player(state, players)
    }
}

/// The complete seed 0 game at three seats with first-choice answers.
const GOLDEN_SEED_ZERO: &str = include_str!("golden/seed0_3p_first_choice.txt");

#[test]
fn test_seed_zero_three_players_golden() {
    let mut game = Game::new(3, 0).unwrap();
    let transcript = drive(&mut game, &mut FirstChoice).unwrap();

    let Some(Entry::Event(Event::GameStarted { players })) = transcript.entries.first() else {
        panic!("expected GameStarted first");
    };
    let roles: Vec<Role> = players.iter().map(|seat| seat.role).collect();
    assert_eq!(roles, [Role::Outlaw, Role::Sheriff, Role::Renegade]);

    // Line by line first, so a mismatch names the entry that moved.
    let rendered = transcript.render();
    for (i, (got, want)) in rendered.lines().zip(GOLDEN_SEED_ZERO.lines()).enumerate() {
        assert_eq!(got, want, "line {}", i + 1);
    }
    assert_eq!(rendered, GOLDEN_SEED_ZERO);
    assert_eq!(transcript.entries.len(), 98);

    let outcome = transcript.outcome.unwrap();
    assert_eq!(outcome.winner, Faction::Law);
    assert_eq!(outcome.turns, 13);
    assert_eq!(outcome.survivors, vec![1]);
}

#[test]
fn test_seed_zero_golden_pins_the_hard_cases() {
    let mut game = Game::new(3, 0).unwrap();
    let transcript = drive(&mut game, &mut FirstChoice).unwrap();
    let entries = &transcript.entries;

    // Player 1 rolls four dynamite: one damage, and no reroll is offered.
    let dynamite = entries
        .iter()
        .position(|e| *e == Entry::Event(Event::Dynamites { player: 1 }))
        .unwrap();
    assert_eq!(
        entries[dynamite + 1],
        Entry::Event(Event::TurnStarted { player: 2 })
    );

    // The Indian attack on Player 1's turn kills Player 0, and the turn goes on.
    let attack = entries
        .iter()
        .position(|e| *e == Entry::Event(Event::IndianAttack))
        .unwrap();
    assert_eq!(entries[attack + 1], Entry::Event(Event::Died { player: 0 }));
    assert_eq!(entries[attack + 2], Entry::Decision(Resume::Dice(Pool::new())));

    // With two players left, Shoot 2 can only target the shooter.
    assert!(entries.windows(2).any(|pair| {
        pair[0] == Entry::Decision(Resume::Action(Action::Shoot { distance: 2 }))
            && pair[1] == Entry::Decision(Resume::Player(1))
    }));

    assert_eq!(
        entries.last(),
        Some(&Entry::Event(Event::Died { player: 2 }))
    );
}

#[test]
fn test_every_table_size_finishes_deterministically() {
    for players in 3..=8 {
        for seed in [1, 99, 12345] {
            let run = || {
                let mut game = Game::new(players, seed).unwrap();
                drive(&mut game, &mut RandomActor::new(seed)).unwrap()
            };
            let first = run();
            assert!(first.outcome.is_some(), "{players} players, seed {seed}");
            assert_eq!(first, run());
        }
    }
}

#[test]
fn test_requests_are_well_formed() {
    for seed in 0..40 {
        let players = 3 + (seed % 6) as usize;
        let mut game = Game::new(players, seed).unwrap();
        let mut auditor = Auditor::new(RandomActor::new(seed ^ 0xdead_beef));
        let transcript = drive(&mut game, &mut auditor).unwrap();

        assert!(transcript.outcome.is_some());
        assert_eq!(auditor.requests, transcript.decisions().len());
        assert!(check_invariants(game.state()).is_empty());
    }
}

#[test]
fn test_dead_players_never_come_back() {
    let mut game = Game::new(8, 4242).unwrap();
    let transcript = drive(&mut game, &mut RandomActor::new(1)).unwrap();

    let mut dead = Vec::new();
    for event in transcript.events() {
        match event {
            Event::Died { player } => {
                assert!(!dead.contains(player), "{player} died twice");
                dead.push(*player);
            }
            Event::TurnStarted { player } => assert!(!dead.contains(player)),
            _ => {}
        }
    }
    for id in dead {
        assert!(game.state().player(id).unwrap().is_dead());
        assert!(!game.state().is_alive(id));
    }
}

#[test]
fn test_invalid_answers_are_rejected_without_effect() {
    let mut game = Game::new(3, 0).unwrap();
    let mut step = game.resume(Resume::Continue).unwrap();
    while let Step::Event(_) = step {
        step = game.resume(Resume::Continue).unwrap();
    }
    let Step::Request(Request::ChooseDice { dice }) = step else {
        panic!("expected a dice request");
    };

    let before = game.state().clone();
    let err = game.resume(Resume::Player(0)).unwrap_err();
    assert!(matches!(err, GameError::InvalidResume { .. }));
    let err = game.resume(Resume::Dice(Pool::of(Face::Dynamite, 1))).unwrap_err();
    assert!(matches!(err, GameError::InvalidResume { .. }));
    assert_eq!(game.state().players(), before.players());
    assert_eq!(game.state().arrows(), before.arrows());
    assert_eq!(
        game.pending_request(),
        Some(Request::ChooseDice { dice: dice.clone() })
    );

    // The game continues normally afterwards.
    let step = game.resume(Resume::Dice(Pool::new())).unwrap();
    assert!(matches!(
        step,
        Step::Request(Request::ChooseAction { .. }) | Step::Event(_)
    ));
}

#[test]
fn test_unsupported_player_counts() {
    for players in [0, 1, 2, 9, 20] {
        assert_eq!(
            Game::new(players, 0).unwrap_err(),
            GameError::InvalidPlayerCount { count: players }
        );
    }
}

#[test]
fn test_turn_limit() {
    let mut game = Game::new(6, 5).unwrap();
    let transcript = drive_for(&mut game, &mut FirstChoice, Some(3)).unwrap();

    assert!(transcript.turns() <= 3);
    assert!(
        transcript.outcome.is_some() || transcript.turns() == 3,
        "a game cut short must have played the full limit"
    );
}
