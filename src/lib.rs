//! Tic-Tac-Toe on boards from 3x3 to 9x9, played by a generic minimax engine.
//!
//! The engine in [`minimax`] knows nothing about Tic-Tac-Toe. It searches any type
//! implementing the [`game::Game`] trait; [`games::tic_tac_toe`] binds the
//! [`board::Board`] model to that trait. [`difficulty`] turns a difficulty level into a
//! search depth, and [`session::GameSession`] ties everything together for a front-end.
//!
//! # Example
//!
//! ```rust
//! use tictactoe_minimax::board::{Board, GameResult, Mark, Move};
//! use tictactoe_minimax::games::tic_tac_toe::TicTacToeState;
//! use tictactoe_minimax::minimax::{Depth, Minimax};
//!
//! // X to move can complete the main diagonal
//! let board = Board::from_rows(&["X..", ".X.", "O.."])
//!     .unwrap()
//!     .with_to_move(Mark::X);
//! let state = TicTacToeState::new(board.clone());
//!
//! let mut minimax = Minimax::builder().with_alpha_beta_pruning(true).build();
//! let result = minimax.search(&state, Depth::Unbounded, true).unwrap();
//!
//! let best_move = result.best_move.unwrap();
//! assert_eq!(best_move, Move::new(2, 2));
//!
//! let after = board.apply_move(best_move, Mark::X).unwrap();
//! assert_eq!(after.evaluate(), GameResult::Win(Mark::X));
//! ```

/// The board model: cells, moves and win detection.
pub mod board;
/// Difficulty levels and their search settings.
pub mod difficulty;
/// Error types for moves, configuration and search.
pub mod error;
/// Contains the `Game` trait the engine searches over.
pub mod game;
/// Contains pre-made implementations of the `Game` trait.
pub mod games;
/// The minimax search engine.
pub mod minimax;
/// Contains traits and implementations for random number generation.
pub mod random;
pub mod session;
