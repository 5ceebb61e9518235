//! Recording and replay through the filesystem.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::fs;

use bang::{
    BotKind, Game, GameError, Recording, ReplayError, Resume, Rules, Table, Transcript, drive,
    drive_for, replay,
};
use tempfile::TempDir;

fn played(players: usize, seed: u64, rules: Rules) -> (Recording, Transcript) {
    let mut game = Game::with_rules(players, seed, rules).unwrap();
    let transcript = drive(&mut game, &mut Table::of(BotKind::Random, players, seed)).unwrap();
    let recording = Recording::from_transcript(seed, players, rules, &transcript);
    (recording, transcript)
}

#[test]
fn test_saved_recording_replays_identically() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("game.json");

    for (players, seed) in [(3, 7), (5, 1234), (8, 99)] {
        let (recording, transcript) = played(players, seed, Rules::default());
        recording.save(&path).unwrap();

        let loaded = Recording::load(&path).unwrap();
        assert_eq!(loaded, recording);
        assert_eq!(replay(&loaded).unwrap(), transcript);
    }
}

#[test]
fn test_turn_limited_recording_replays_identically() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cut.json");

    for bot in [BotKind::First, BotKind::Random, BotKind::Cautious] {
        for max_turns in 1..=4 {
            for seed in 0..100 {
                let mut game = Game::new(3, seed).unwrap();
                let mut table = Table::of(bot, 3, seed);
                let transcript = drive_for(&mut game, &mut table, Some(max_turns)).unwrap();
                let recording = Recording::from_transcript(seed, 3, Rules::default(), &transcript);
                recording.save(&path).unwrap();

                let replayed = replay(&Recording::load(&path).unwrap()).unwrap();
                assert_eq!(replayed, transcript, "{bot} seed {seed} limit {max_turns}");
                if transcript.outcome.is_none() {
                    assert_eq!(recording.turns, Some(max_turns));
                }
            }
        }
    }
}

#[test]
fn test_custom_rules_are_recorded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.json");
    let rules = Rules {
        arrows: 4,
        dice: 6,
        rerolls: 1,
    };

    let (recording, transcript) = played(4, 21, rules);
    recording.save(&path).unwrap();

    let loaded = Recording::load(&path).unwrap();
    assert_eq!(loaded.rules, rules);
    assert_eq!(replay(&loaded).unwrap(), transcript);
}

#[test]
fn test_missing_rules_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("old.json");
    fs::write(&path, r#"{"seed": 3, "players": 3, "decisions": []}"#).unwrap();

    let loaded = Recording::load(&path).unwrap();
    assert_eq!(loaded.rules, Rules::default());
    assert!(replay(&loaded).unwrap().outcome.is_none());
}

#[test]
fn test_tampered_recording_diverges() {
    let (mut recording, _) = played(3, 5, Rules::default());
    // No game opens with a player request.
    recording.decisions[0] = Resume::Player(0);

    let err = replay(&recording).unwrap_err();
    assert!(matches!(
        err,
        ReplayError::Diverged {
            index: 0,
            source: GameError::InvalidResume { .. }
        }
    ));
    assert!(err.to_string().contains("decision 0"));
}

#[test]
fn test_truncated_recording_stops_early() {
    let (mut recording, transcript) = played(4, 77, Rules::default());
    let keep = recording.decisions.len() / 2;
    recording.decisions.truncate(keep);

    let partial = replay(&recording).unwrap();
    assert!(partial.outcome.is_none());
    assert_eq!(partial.decisions().len(), keep);
    assert_eq!(partial.entries, transcript.entries[..partial.entries.len()]);
}

#[test]
fn test_load_errors() {
    let dir = TempDir::new().unwrap();

    let missing = Recording::load(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(missing, ReplayError::Io(_)));

    let garbage = dir.path().join("garbage.json");
    fs::write(&garbage, "not json").unwrap();
    assert!(matches!(
        Recording::load(&garbage).unwrap_err(),
        ReplayError::Json(_)
    ));
}
