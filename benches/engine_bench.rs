use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use labyrinth::board::{Board, Direction, Graph, Maze, Shift, ALL_COLORS};
use labyrinth::client::{random_move, seeking_move};
use labyrinth::game::Game;
use labyrinth::snapshot::to_json;

fn board() -> Board {
    Board::random(&mut SmallRng::seed_from_u64(1))
}

fn bench_graph_compute(c: &mut Criterion) {
    let board = board();
    c.bench_function("graph_compute", |b| {
        b.iter(|| Graph::compute(black_box(&board)))
    });
}

fn bench_apply_shift(c: &mut Criterion) {
    let maze = Maze::new(board());
    let shift = Shift::new(Direction::EAST, 3, 1);
    c.bench_function("maze_apply_shift", |b| {
        b.iter(|| {
            let mut m = maze.clone();
            m.apply_shift(black_box(shift)).unwrap();
            m
        })
    });
}

fn bench_board_clone(c: &mut Criterion) {
    let maze = Maze::new(board());
    c.bench_function("maze_clone", |b| b.iter(|| black_box(&maze).clone()));
}

fn bench_random_move(c: &mut Criterion) {
    let game = Game::new(&ALL_COLORS, &mut SmallRng::seed_from_u64(2)).unwrap();
    let mut rng = SmallRng::seed_from_u64(3);
    c.bench_function("random_move", |b| {
        b.iter(|| random_move(black_box(&game), &mut rng))
    });
}

fn bench_seeking_move(c: &mut Criterion) {
    let game = Game::new(&ALL_COLORS, &mut SmallRng::seed_from_u64(2)).unwrap();
    let mut rng = SmallRng::seed_from_u64(4);
    c.bench_function("seeking_move", |b| {
        b.iter(|| seeking_move(black_box(&game), &mut rng))
    });
}

fn bench_snapshot_json(c: &mut Criterion) {
    let game = Game::new(&ALL_COLORS, &mut SmallRng::seed_from_u64(2)).unwrap();
    c.bench_function("snapshot_json", |b| b.iter(|| to_json(black_box(&game)).unwrap()));
}

criterion_group!(
    benches,
    bench_graph_compute,
    bench_apply_shift,
    bench_board_clone,
    bench_random_move,
    bench_seeking_move,
    bench_snapshot_json,
);
criterion_main!(benches);
