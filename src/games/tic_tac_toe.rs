use crate::board::{Board, GameResult, Mark, Move};
use crate::error::SearchError;
use crate::game::{Game, GameOutcome, Score};
use crate::minimax::{Depth, Minimax, SearchResult};

/// An implementation of the [`Game`] trait for Tic-Tac-Toe on any supported board size.
///
/// Wraps a [`Board`] together with the mark the search maximizes for. Moves are
/// `(row, col)` coordinates enumerated in row-major order.
#[derive(Debug, Clone)]
pub struct TicTacToeState {
    board: Board,
    maximizer: Mark,
    result: GameResult,
}

impl TicTacToeState {
    /// Wraps `board`, maximizing for the mark currently to move.
    pub fn new(board: Board) -> Self {
        let maximizer = board.to_move();
        Self::with_maximizer(board, maximizer)
    }

    /// Wraps `board`, maximizing for `maximizer`.
    pub fn with_maximizer(board: Board, maximizer: Mark) -> Self {
        let result = board.evaluate();
        Self {
            board,
            maximizer,
            result,
        }
    }

    /// The wrapped board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark the scores are relative to.
    pub fn maximizer(&self) -> Mark {
        self.maximizer
    }

    /// Searches for the best move of the maximizer, who must be the mark to move.
    ///
    /// Returns `None` in the search result when the board is already decided or
    /// `depth` is zero.
    pub fn best_move(&self, depth: Depth) -> Result<SearchResult<Move>, SearchError> {
        Minimax::default().search(self, depth, self.board.to_move() == self.maximizer)
    }
}

impl Game for TicTacToeState {
    type Move = Move;

    fn get_available_moves(&self) -> Vec<Move> {
        if self.result.is_over() {
            return Vec::new();
        }
        self.board.legal_moves()
    }

    fn perform_move(&mut self, mv: &Move) {
        let mark = self.board.to_move();
        self.board.place_legal(*mv, mark);
        self.result = self.board.evaluate();
    }

    fn get_outcome(&self) -> GameOutcome {
        match self.result {
            GameResult::InProgress => GameOutcome::InProgress,
            GameResult::Draw => GameOutcome::Draw,
            GameResult::Win(mark) if mark == self.maximizer => GameOutcome::Win,
            GameResult::Win(_) => GameOutcome::Lose,
        }
    }

    fn evaluate(&self, ply: u32) -> Score {
        // cut-off positions are neutral; only decided games carry a score
        self.get_outcome().score(ply)
    }
}
