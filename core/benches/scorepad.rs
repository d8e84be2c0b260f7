use core::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion};
use qwixx_core::{RowColor, ScoreEngine};

/// Plays a pad to game over: two rows locked, two partly filled, two
/// penalties.
fn play_full_game() -> ScoreEngine {
    let mut engine = ScoreEngine::new();
    for value in [2, 4, 6, 8, 10, 11, 12] {
        engine.mark(RowColor::Red, value).unwrap();
    }
    for value in [3, 5, 7, 9] {
        engine.mark(RowColor::Yellow, value).unwrap();
    }
    for value in [11, 9, 6, 5] {
        engine.mark(RowColor::Blue, value).unwrap();
    }
    engine.add_penalty();
    engine.add_penalty();
    for value in [12, 10, 8, 5, 3, 2] {
        engine.mark(RowColor::Green, value).unwrap();
    }
    engine
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game", |b| {
        b.iter(|| black_box(play_full_game()));
    });
}

fn bench_score(c: &mut Criterion) {
    let engine = play_full_game();

    c.bench_function("score", |b| {
        b.iter(|| black_box(&engine).score());
    });
}

fn bench_snapshot_round_trip(c: &mut Criterion) {
    let engine = play_full_game();

    c.bench_function("snapshot_round_trip", |b| {
        b.iter(|| ScoreEngine::from_snapshot(black_box(&engine.snapshot())).unwrap());
    });
}

criterion_group!(
    benches,
    bench_full_game,
    bench_score,
    bench_snapshot_round_trip
);
criterion_main!(benches);
