//! Benchmarks for running complete games.
//!
//! This benchmarks the full tournament game loop, bots included.

#![allow(missing_docs)]

use std::hint::black_box;

use bang::BotKind;
use bang::tournament::{TournamentConfig, run_game};
use criterion::{Criterion, criterion_group, criterion_main};

fn config(players: usize, bot: BotKind) -> TournamentConfig {
    TournamentConfig {
        players,
        bot,
        ..TournamentConfig::default()
    }
}

fn bench_single_game(c: &mut Criterion) {
    let config = config(3, BotKind::First);

    c.bench_function("single_game_3p", |b| {
        b.iter(|| {
            let result = run_game(black_box(42), black_box(&config));
            black_box(result)
        });
    });
}

fn bench_single_game_8p(c: &mut Criterion) {
    // Full table with random bots
    let config = config(8, BotKind::Random);

    c.bench_function("single_game_8p", |b| {
        b.iter(|| {
            let result = run_game(black_box(42), black_box(&config));
            black_box(result)
        });
    });
}

fn bench_game_batch(c: &mut Criterion) {
    // 10 games sequentially (without parallel overhead)
    let config = config(5, BotKind::Cautious);

    c.bench_function("10_games_sequential", |b| {
        b.iter(|| {
            for seed in 0..10u64 {
                let result = run_game(black_box(seed), black_box(&config));
                black_box(result).ok();
            }
        });
    });
}

criterion_group!(
    benches,
    bench_single_game,
    bench_single_game_8p,
    bench_game_batch
);
criterion_main!(benches);
