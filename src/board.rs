use crate::error::{ConfigError, MoveError};
use std::fmt;

/// Smallest supported side length.
pub const MIN_SIZE: usize = 3;
/// Largest supported side length.
pub const MAX_SIZE: usize = 9;

/// One of the two player marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Mark {
    /// Moves first on a fresh board.
    X,
    /// Moves second on a fresh board.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A `(row, col)` coordinate on the board, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Move {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Move {
    /// Creates a move at `(row, col)`.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a 1-based cell number as shown to players into a move.
    ///
    /// Returns `None` when the number does not address a cell of a
    /// `size x size` board.
    pub fn from_cell_number(number: usize, size: usize) -> Option<Self> {
        if number == 0 || number > size * size {
            return None;
        }
        let index = number - 1;
        Some(Self::new(index / size, index % size))
    }

    /// The 1-based cell number of this move on a `size x size` board.
    pub fn cell_number(&self, size: usize) -> usize {
        self.row * size + self.col + 1
    }
}

/// Outcome of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// No full line and at least one empty cell.
    InProgress,
    /// The given mark owns a full row, column or diagonal.
    Win(Mark),
    /// Every cell is filled and nobody owns a full line.
    Draw,
}

impl GameResult {
    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        *self != GameResult::InProgress
    }
}

/// An `N x N` Tic-Tac-Toe grid together with the mark to move and the moves played.
///
/// Cells are stored row-major. A line is won only when all `N` cells of a row,
/// column or diagonal hold the same mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Mark>>,
    to_move: Mark,
    history: Vec<Move>,
}

impl Board {
    /// Creates an empty board with X to move.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(ConfigError::BoardSize { size });
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
            to_move: Mark::X,
            history: Vec::new(),
        })
    }

    /// Parses a position from one string per row.
    ///
    /// `X` and `O` are marks, `.` or `_` is an empty cell and whitespace is ignored.
    /// The mark to move is X when both marks appear equally often, otherwise O;
    /// use [`Board::with_to_move`] to override it. The parsed position has an
    /// empty move history.
    pub fn from_rows(rows: &[&str]) -> Result<Self, ConfigError> {
        let mut board = Self::new(rows.len())?;
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != board.size {
                return Err(ConfigError::BoardLayout {
                    reason: format!(
                        "row {} has {} cells, expected {}",
                        row,
                        cells.len(),
                        board.size
                    ),
                });
            }
            for (col, symbol) in cells.into_iter().enumerate() {
                let cell = match symbol.to_ascii_uppercase() {
                    'X' => Some(Mark::X),
                    'O' => Some(Mark::O),
                    '.' | '_' => None,
                    other => {
                        return Err(ConfigError::BoardLayout {
                            reason: format!("unexpected symbol '{}' at ({}, {})", other, row, col),
                        });
                    }
                };
                board.cells[row * board.size + col] = cell;
            }
        }

        let (x_count, o_count) = board.mark_counts();
        board.to_move = if x_count == o_count { Mark::X } else { Mark::O };
        Ok(board)
    }

    /// Overrides the mark to move.
    pub fn with_to_move(mut self, mark: Mark) -> Self {
        self.to_move = mark;
        self
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The mark that moves next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Moves applied to this board, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The content of a cell, or `None` when the coordinate is off the board.
    pub fn cell(&self, mv: Move) -> Option<Option<Mark>> {
        self.index_of(mv).map(|index| self.cells[index])
    }

    /// Number of X and O marks on the board.
    pub fn mark_counts(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(x, o), cell| match cell {
            Some(Mark::X) => (x + 1, o),
            Some(Mark::O) => (x, o + 1),
            None => (x, o),
        })
    }

    /// Whether no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// All empty cells in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| Move::new(index / self.size, index % self.size))
            .collect()
    }

    /// Returns a new board with `mark` placed at `mv`.
    ///
    /// The receiver is left untouched. After the move the opponent of `mark`
    /// is to move.
    pub fn apply_move(&self, mv: Move, mark: Mark) -> Result<Board, MoveError> {
        let mut next = self.clone();
        next.place(mv, mark)?;
        Ok(next)
    }

    /// Places `mark` at `mv` in place, validating the coordinate and the cell.
    pub fn place(&mut self, mv: Move, mark: Mark) -> Result<(), MoveError> {
        let index = self.index_of(mv).ok_or(MoveError::OutOfBounds {
            row: mv.row,
            col: mv.col,
            size: self.size,
        })?;
        if let Some(existing) = self.cells[index] {
            return Err(MoveError::Occupied { mv, mark: existing });
        }
        self.mark_cell(index, mv, mark);
        Ok(())
    }

    /// Places a mark the caller already knows to be legal.
    ///
    /// Only used with moves produced by [`Board::legal_moves`] on this board.
    pub(crate) fn place_legal(&mut self, mv: Move, mark: Mark) {
        let index = mv.row * self.size + mv.col;
        debug_assert!(self.cells[index].is_none(), "{mv} is occupied");
        self.mark_cell(index, mv, mark);
    }

    fn mark_cell(&mut self, index: usize, mv: Move, mark: Mark) {
        self.cells[index] = Some(mark);
        self.history.push(mv);
        self.to_move = mark.opponent();
    }

    /// Checks every row, column and both diagonals for a full line of one mark.
    pub fn evaluate(&self) -> GameResult {
        let n = self.size;

        for row in 0..n {
            if let Some(mark) = self.line_owner((0..n).map(|col| row * n + col)) {
                return GameResult::Win(mark);
            }
        }

        for col in 0..n {
            if let Some(mark) = self.line_owner((0..n).map(|row| row * n + col)) {
                return GameResult::Win(mark);
            }
        }

        if let Some(mark) = self.line_owner((0..n).map(|i| i * n + i)) {
            return GameResult::Win(mark);
        }

        if let Some(mark) = self.line_owner((0..n).map(|i| i * n + (n - 1 - i))) {
            return GameResult::Win(mark);
        }

        if self.is_full() {
            GameResult::Draw
        } else {
            GameResult::InProgress
        }
    }

    fn line_owner(&self, mut line: impl Iterator<Item = usize>) -> Option<Mark> {
        let first = self.cells[line.next()?]?;
        line.all(|index| self.cells[index] == Some(first))
            .then_some(first)
    }

    fn index_of(&self, mv: Move) -> Option<usize> {
        (mv.row < self.size && mv.col < self.size).then(|| mv.row * self.size + mv.col)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            let line: String = (0..self.size)
                .map(|col| match self.cells[row * self.size + col] {
                    Some(Mark::X) => 'X',
                    Some(Mark::O) => 'O',
                    None => '.',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_boards_list_every_cell_row_major() {
        for size in MIN_SIZE..=MAX_SIZE {
            // arrange
            let board = Board::new(size).unwrap();

            // act
            let moves = board.legal_moves();

            // assert
            assert_eq!(moves.len(), size * size);
            for (index, mv) in moves.iter().enumerate() {
                assert_eq!(*mv, Move::new(index / size, index % size));
            }
        }
    }

    #[test]
    fn rejects_unsupported_sizes() {
        assert_eq!(Board::new(2), Err(ConfigError::BoardSize { size: 2 }));
        assert_eq!(Board::new(10), Err(ConfigError::BoardSize { size: 10 }));
    }

    #[test]
    fn apply_move_leaves_original_untouched() {
        // arrange
        let board = Board::new(3).unwrap();

        // act
        let next = board.apply_move(Move::new(1, 1), Mark::X).unwrap();

        // assert
        assert_eq!(board.cell(Move::new(1, 1)), Some(None));
        assert_eq!(next.cell(Move::new(1, 1)), Some(Some(Mark::X)));
        assert_eq!(next.to_move(), Mark::O);
        assert_eq!(next.history(), &[Move::new(1, 1)]);
        assert_eq!(next.legal_moves().len(), 8);
    }

    #[test]
    fn apply_move_out_of_range_fails() {
        let board = Board::new(3).unwrap();

        let err = board.apply_move(Move::new(9, 0), Mark::X).unwrap_err();

        assert_eq!(
            err,
            MoveError::OutOfBounds {
                row: 9,
                col: 0,
                size: 3
            }
        );
    }

    #[test]
    fn apply_move_on_occupied_cell_fails() {
        let board = Board::new(3)
            .unwrap()
            .apply_move(Move::new(0, 2), Mark::X)
            .unwrap();

        let err = board.apply_move(Move::new(0, 2), Mark::O).unwrap_err();

        assert_eq!(
            err,
            MoveError::Occupied {
                mv: Move::new(0, 2),
                mark: Mark::X
            }
        );
    }

    #[test]
    fn detects_rows_columns_and_diagonals() {
        let row = Board::from_rows(&["...", "OOO", "XX."]).unwrap();
        let col = Board::from_rows(&["X.O", "X.O", "X.."]).unwrap();
        let diag = Board::from_rows(&["O.X", ".OX", "X.O"]).unwrap();
        let anti = Board::from_rows(&["O.X", ".XO", "X.."]).unwrap();

        assert_eq!(row.evaluate(), GameResult::Win(Mark::O));
        assert_eq!(col.evaluate(), GameResult::Win(Mark::X));
        assert_eq!(diag.evaluate(), GameResult::Win(Mark::O));
        assert_eq!(anti.evaluate(), GameResult::Win(Mark::X));
    }

    #[test]
    fn partial_runs_never_win() {
        for size in MIN_SIZE..=MAX_SIZE {
            // arrange: every line one mark short of complete
            let mut row = Board::new(size).unwrap();
            let mut col = Board::new(size).unwrap();
            let mut diag = Board::new(size).unwrap();
            let mut anti = Board::new(size).unwrap();
            for i in 0..size - 1 {
                row.place(Move::new(0, i), Mark::X).unwrap();
                col.place(Move::new(i, 0), Mark::X).unwrap();
                diag.place(Move::new(i, i), Mark::X).unwrap();
                anti.place(Move::new(i, size - 1 - i), Mark::X).unwrap();
            }

            // assert
            assert_eq!(row.evaluate(), GameResult::InProgress, "row, size {size}");
            assert_eq!(col.evaluate(), GameResult::InProgress, "col, size {size}");
            assert_eq!(diag.evaluate(), GameResult::InProgress, "diag, size {size}");
            assert_eq!(anti.evaluate(), GameResult::InProgress, "anti, size {size}");

            // act: completing the line wins
            row.place(Move::new(0, size - 1), Mark::X).unwrap();
            anti.place(Move::new(size - 1, 0), Mark::X).unwrap();
            assert_eq!(row.evaluate(), GameResult::Win(Mark::X));
            assert_eq!(anti.evaluate(), GameResult::Win(Mark::X));
        }
    }

    #[test]
    fn three_in_a_row_on_larger_board_is_not_a_win() {
        let board = Board::from_rows(&["XXX.", "OO..", "....", "...."]).unwrap();

        assert_eq!(board.evaluate(), GameResult::InProgress);
    }

    #[test]
    fn full_board_without_line_is_draw_and_stays_draw() {
        let board = Board::from_rows(&["XOX", "XOO", "OXX"]).unwrap();

        let first = board.evaluate();

        assert_eq!(first, GameResult::Draw);
        assert_eq!(board.evaluate(), first);
        assert_eq!(board.evaluate(), first);
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn from_rows_infers_mark_to_move() {
        let x_to_move = Board::from_rows(&["X..", "...", "..O"]).unwrap();
        let o_to_move = Board::from_rows(&["X..", "...", "..."]).unwrap();
        let forced = Board::from_rows(&["X..", ".X.", "..O"])
            .unwrap()
            .with_to_move(Mark::X);

        assert_eq!(x_to_move.to_move(), Mark::X);
        assert_eq!(o_to_move.to_move(), Mark::O);
        assert_eq!(forced.to_move(), Mark::X);
    }

    #[test]
    fn from_rows_rejects_bad_layouts() {
        assert!(matches!(
            Board::from_rows(&["X..", "..", "..."]),
            Err(ConfigError::BoardLayout { .. })
        ));
        assert!(matches!(
            Board::from_rows(&["X..", ".Q.", "..."]),
            Err(ConfigError::BoardLayout { .. })
        ));
        assert_eq!(
            Board::from_rows(&["..", ".."]),
            Err(ConfigError::BoardSize { size: 2 })
        );
    }

    #[test]
    fn cell_numbers_round_trip_through_moves() {
        assert_eq!(Move::from_cell_number(1, 3), Some(Move::new(0, 0)));
        assert_eq!(Move::from_cell_number(6, 3), Some(Move::new(1, 2)));
        assert_eq!(Move::from_cell_number(81, 9), Some(Move::new(8, 8)));
        assert_eq!(Move::from_cell_number(0, 3), None);
        assert_eq!(Move::from_cell_number(10, 3), None);
        assert_eq!(Move::new(2, 1).cell_number(4), 10);
    }

    #[test]
    fn displays_grid() {
        let board = Board::from_rows(&["X..", ".O.", "..."]).unwrap();

        assert_eq!(board.to_string(), "X..\n.O.\n...\n");
    }
}
