use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lines_game::core::{find_all_lines, find_path, GameConfig, GameState, Grid};
use lines_game::engine::{apply_move, choose_move, settle};
use lines_game::types::{Coord, PieceColor, MIN_LINE_LENGTH, TICK_MS};

/// Half-full board with a few runs in every direction
fn busy_grid() -> Grid {
    let mut grid = Grid::new(10, 10);
    for y in 0..10i16 {
        for x in 0..10i16 {
            if (x * 7 + y * 3) % 2 == 0 {
                let color = PieceColor::ALL[((x / 2 + y) % 6) as usize];
                grid.place_piece(Coord::new(x, y), color);
            }
        }
    }
    grid
}

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig {
        seed: 12345,
        ..GameConfig::default()
    })
    .unwrap();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(TICK_MS));
        })
    });
}

fn bench_find_lines(c: &mut Criterion) {
    let grid = busy_grid();

    c.bench_function("find_all_lines", |b| {
        b.iter(|| find_all_lines(black_box(&grid), MIN_LINE_LENGTH as usize))
    });
}

fn bench_find_path(c: &mut Criterion) {
    let mut grid = Grid::new(10, 10);
    // Serpentine walls force a long route.
    for y in (1..10).step_by(2) {
        let gap = if y % 4 == 1 { 9 } else { 0 };
        for x in 0..10 {
            if x != gap {
                grid.place_piece(Coord::new(x, y), PieceColor::Blue);
            }
        }
    }
    grid.place_piece(Coord::new(0, 0), PieceColor::Red);

    c.bench_function("find_path_serpentine", |b| {
        b.iter(|| find_path(black_box(&grid), Coord::new(0, 0), Coord::new(9, 8)))
    });
}

fn bench_greedy_game(c: &mut Criterion) {
    c.bench_function("greedy_game_100_moves", |b| {
        b.iter(|| {
            let mut state = GameState::new(GameConfig {
                seed: 7,
                ..GameConfig::default()
            })
            .unwrap();
            for _ in 0..100 {
                settle(&mut state, TICK_MS, 10_000);
                let Some((from, to)) = choose_move(&state) else {
                    break;
                };
                let _ = apply_move(&mut state, from, to);
            }
            state.score()
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_find_lines,
    bench_find_path,
    bench_greedy_game
);
criterion_main!(benches);
