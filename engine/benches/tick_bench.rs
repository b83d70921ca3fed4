use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use snake_engine::SessionRng;
use snake_engine::snake::{Direction, FieldSize, SnakeGameState};

fn play_ticks(ticks: usize) -> u32 {
    let mut state = SnakeGameState::new(FieldSize::new(50, 50), 5, SessionRng::new(42));
    let mut best_score = 0;
    for i in 0..ticks {
        if i % 9 == 0 {
            state.request_direction(Direction::ALL[(i / 9) % 4]);
        }
        state.tick();
        best_score = best_score.max(state.score());
    }
    best_score
}

fn bench_ticks(c: &mut Criterion) {
    c.bench_function("tick_1000_on_50x50", |b| {
        b.iter(|| play_ticks(black_box(1000)))
    });
}

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("start_game_200x200", |b| {
        b.iter(|| SnakeGameState::new(black_box(FieldSize::new(200, 200)), 5, SessionRng::new(7)))
    });
}

criterion_group!(benches, bench_ticks, bench_new_game);
criterion_main!(benches);
