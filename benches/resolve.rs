use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;

use merge_grid::board::BoardState;
use merge_grid::core::{Direction, GameConfig, GameRng};
use merge_grid::events::GameEvent;
use merge_grid::game::Game;
use merge_grid::moves::{MoveResolver, TileSpawner};
use merge_grid::tiles::{Ladder, TileRegistry};

/// Deterministic board snapshots at a variety of densities, produced by
/// playing a seeded game with a fixed direction cycle.
fn corpus() -> Vec<(BoardState, TileRegistry)> {
    let mut game = Game::new(GameConfig::classic(), 42);
    game.drain_events();

    let seq = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];
    let mut boards = vec![(game.board().clone(), game.tiles().clone())];
    for i in 0..40 {
        if game.try_move(seq[i % seq.len()]) {
            let transitions = game
                .drain_events()
                .filter(|e| matches!(e, GameEvent::Effect(effect) if effect.needs_settlement()))
                .count();
            for _ in 0..transitions {
                game.transition_complete();
            }
            game.drain_events();
        }
        boards.push((game.board().clone(), game.tiles().clone()));
    }
    boards
}

fn bench_resolve(c: &mut Criterion) {
    let ladder = Ladder::classic();
    for direction in Direction::all() {
        c.bench_function(&format!("resolve/{}", direction), |b| {
            b.iter_batched(
                corpus,
                |mut boards| {
                    let mut acc = 0usize;
                    for (board, tiles) in boards.iter_mut() {
                        let outcome = MoveResolver::resolve(board, tiles, &ladder, direction);
                        acc += outcome.effects.len();
                    }
                    black_box(acc)
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_spawn(c: &mut Criterion) {
    let ladder = Ladder::classic();
    c.bench_function("spawn/fill_board", |b| {
        b.iter_batched(
            || (BoardState::new(4), TileRegistry::new(), GameRng::new(7)),
            |(mut board, mut tiles, mut rng)| {
                while TileSpawner::spawn(&mut board, &mut tiles, &ladder, &mut rng).is_some() {}
                black_box(tiles.len())
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_full_rounds(c: &mut Criterion) {
    c.bench_function("game/64_rounds", |b| {
        b.iter_batched(
            || Game::new(GameConfig::classic(), 9),
            |mut game| {
                let seq = [
                    Direction::Left,
                    Direction::Up,
                    Direction::Right,
                    Direction::Down,
                ];
                for i in 0..64 {
                    if game.try_move(seq[i % seq.len()]) {
                        let transitions = game
                            .drain_events()
                            .filter(
                                |e| matches!(e, GameEvent::Effect(effect) if effect.needs_settlement()),
                            )
                            .count();
                        for _ in 0..transitions {
                            game.transition_complete();
                        }
                    }
                    game.drain_events();
                }
                black_box(game.score().current())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(resolve, bench_resolve, bench_spawn, bench_full_rounds);
criterion_main!(resolve);
