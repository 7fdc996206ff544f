use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_minimax::board::{Board, Mark, Move};
use tictactoe_minimax::difficulty::{Difficulty, configure_search};
use tictactoe_minimax::games::tic_tac_toe::TicTacToeState;
use tictactoe_minimax::minimax::{Depth, Minimax};

fn search(board: &Board, depth: Depth, use_alpha_beta_pruning: bool) {
    let state = TicTacToeState::new(board.clone());
    let mut minimax = Minimax::builder()
        .with_alpha_beta_pruning(use_alpha_beta_pruning)
        .build();
    black_box(minimax.search(&state, depth, true).unwrap());
}

fn bench_empty_3x3(c: &mut Criterion) {
    let board = Board::new(3).unwrap();
    let mut group = c.benchmark_group("empty_3x3");

    group.sampling_mode(SamplingMode::Flat).sample_size(10);

    group.bench_function("alpha_beta", |b| {
        b.iter(|| search(&board, Depth::Unbounded, true))
    });
    group.bench_function("plain", |b| {
        b.iter(|| search(&board, Depth::Unbounded, false))
    });

    group.finish();
}

fn bench_impossible_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("impossible_first_reply");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    for size in [4, 6, 9] {
        let board = Board::new(size)
            .unwrap()
            .apply_move(Move::new(0, 0), Mark::X)
            .unwrap();
        let depth = configure_search(Difficulty::Impossible, size).depth;
        group.bench_function(format!("{size}x{size}"), |b| {
            b.iter(|| search(&board, depth, true))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_empty_3x3, bench_impossible_by_size);
criterion_main!(benches);
