use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fallgrid::core::{EngineConfig, GameSession, Grid, Randomizer, RandomizerKind};
use fallgrid::types::Command;

fn new_session() -> GameSession<Randomizer> {
    let config = EngineConfig::default();
    GameSession::new(&config, Randomizer::new(RandomizerKind::Uniform, 12345)).unwrap()
}

fn bench_update(c: &mut Criterion) {
    let mut session = new_session();

    c.bench_function("update_16ms", |b| {
        b.iter(|| {
            if !session.is_running() {
                session = new_session();
            }
            session.update(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut picture = "..........\n".repeat(16);
    picture.push_str(&"##########\n".repeat(4));
    let full = Grid::parse(&picture).unwrap();

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = full.clone();
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut session = new_session();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if !session.is_running() {
                session = new_session();
            }
            black_box(session.hard_drop());
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut session = new_session();

    c.bench_function("try_move", |b| {
        b.iter(|| {
            session.apply(black_box(Command::MoveRight));
            session.apply(black_box(Command::MoveLeft));
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut session = new_session();

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            session.apply(black_box(Command::RotateRight));
        })
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_line_clear,
    bench_hard_drop,
    bench_try_move,
    bench_try_rotate
);
criterion_main!(benches);
