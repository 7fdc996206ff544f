use crate::board::{Mark, Move};

/// A move that cannot be applied to the board in its current state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The coordinate lies outside the `size x size` grid.
    #[display("move ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side length of the board.
        size: usize,
    },
    /// The target cell already holds a mark.
    #[display("cell {mv} is already taken by {mark}")]
    Occupied {
        /// The rejected move.
        mv: Move,
        /// The mark found in the cell.
        mark: Mark,
    },
    /// The game has already been won or drawn.
    #[display("the game is already over")]
    GameOver,
    /// A human move was submitted while the AI is to move.
    #[display("it is not {mark}'s turn")]
    OutOfTurn {
        /// The mark that tried to move.
        mark: Mark,
    },
}

/// A rejected game or board configuration.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// Board size outside `3..=9`.
    #[display("board size {size} is not supported, expected a value between 3 and 9")]
    BoardSize {
        /// The rejected size.
        size: usize,
    },
    /// A difficulty name that is not one of the known levels.
    #[display("unknown difficulty '{name}'")]
    UnknownDifficulty {
        /// The rejected name.
        name: String,
    },
    /// A textual board position that could not be parsed.
    #[display("malformed board layout: {reason}")]
    BoardLayout {
        /// What was wrong with the layout.
        reason: String,
    },
}

/// Failures raised by the minimax engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// A non-terminal state produced no moves. The game implementation's
    /// terminal test and move generator disagree.
    #[display("non-terminal state at ply {ply} has no legal moves")]
    NoLegalMoves {
        /// Distance from the search root.
        ply: u32,
    },
}

/// Any error surfaced by a [`GameSession`](crate::session::GameSession).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// See [`MoveError`].
    #[display("invalid move: {_0}")]
    InvalidMove(#[error(source)] MoveError),
    /// See [`ConfigError`].
    #[display("invalid configuration: {_0}")]
    InvalidConfiguration(#[error(source)] ConfigError),
    /// See [`SearchError`].
    #[display("search failed: {_0}")]
    Search(#[error(source)] SearchError),
}
