//! Bundled implementations of the [`Game`](crate::game::Game) trait.

/// A `Game` implementation for Tic-Tac-Toe on 3x3 to 9x9 boards.
pub mod tic_tac_toe;
