extern crate tictactoe_minimax;

use tictactoe_minimax::board::{Board, GameResult};
use tictactoe_minimax::games::tic_tac_toe::TicTacToeState;
use tictactoe_minimax::minimax::{Depth, Minimax};

fn main() {
    // Score every opening move on an empty 3x3 board
    let board = Board::new(3).unwrap();
    let state = TicTacToeState::new(board.clone());

    // Without pruning every child carries its exact value
    let mut minimax = Minimax::builder()
        .with_alpha_beta_pruning(false)
        .with_trace(true)
        .build();
    let result = minimax.search(&state, Depth::Unbounded, true).unwrap();

    let trace = minimax.trace().unwrap();
    for child in trace.root().children() {
        let node = child.value();
        println!("Move: {:?} = {}", node.prev_move, node.score);
    }
    println!(
        "The best opening is {:?} after {} nodes",
        result.best_move,
        minimax.stats().nodes
    );

    // Let the engine play both sides to the end
    let mut board = board;
    let mut minimax = Minimax::builder().with_alpha_beta_pruning(true).build();
    while board.evaluate() == GameResult::InProgress {
        let mark = board.to_move();
        let state = TicTacToeState::new(board.clone());
        let result = minimax.search(&state, Depth::Unbounded, true).unwrap();
        let best_move = result.best_move.unwrap();
        println!(
            "{mark} plays {best_move} (score {}, {} nodes)",
            result.score,
            minimax.stats().nodes
        );
        board = board.apply_move(best_move, mark).unwrap();
    }

    println!("{board}");
    assert_eq!(board.evaluate(), GameResult::Draw);
    println!("Perfect play ends in a draw.");
}
