use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bee_grid::core::{BoardConfig, Command, GameRng, MoveDirection, Turn};
use bee_grid::rules::{apply_move, apply_turn, generate};
use bee_grid::session::Session;

fn bench_generate(c: &mut Criterion) {
    let config = BoardConfig::default();
    let crowded = BoardConfig::new().with_size(8).with_random_honey(60);

    c.bench_function("generate_default", |b| {
        let mut rng = GameRng::new(42);
        b.iter(|| generate(black_box(&config), &mut rng).unwrap())
    });
    c.bench_function("generate_crowded", |b| {
        let mut rng = GameRng::new(42);
        b.iter(|| generate(black_box(&crowded), &mut rng).unwrap())
    });
}

fn bench_transitions(c: &mut Criterion) {
    let state = generate(&BoardConfig::default(), &mut GameRng::new(7))
        .unwrap()
        .into_state();

    c.bench_function("apply_move", |b| {
        b.iter(|| apply_move(black_box(state.clone()), MoveDirection::Forward))
    });
    c.bench_function("apply_turn", |b| {
        b.iter(|| apply_turn(black_box(state.clone()), Turn::Right))
    });
}

fn bench_session(c: &mut Criterion) {
    let script = [
        Command::MoveForward,
        Command::TurnRight,
        Command::MoveForward,
        Command::MoveBackward,
        Command::TurnLeft,
        Command::MoveForward,
    ];

    c.bench_function("session_dispatch_script", |b| {
        b.iter(|| {
            let mut session = Session::new(BoardConfig::default(), 42).unwrap();
            for &command in &script {
                black_box(session.dispatch(command));
            }
            session
        })
    });
}

criterion_group!(benches, bench_generate, bench_transitions, bench_session);
criterion_main!(benches);
