//! The interface the terminal front-end drives: one session per game.

use crate::board::{Board, GameResult, Mark, Move};
use crate::difficulty::{Difficulty, SearchConfig, configure_search};
use crate::error::{GameError, MoveError, SearchError};
use crate::games::tic_tac_toe::TicTacToeState;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use tracing::{debug, info, instrument};

/// Who sits at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, clap::ValueEnum)]
pub enum GameMode {
    /// Two humans take turns at the same terminal.
    #[value(name = "pvp")]
    #[display("two players")]
    PlayerVsPlayer,
    /// One human against the AI.
    #[value(name = "pvai")]
    #[display("player vs AI")]
    PlayerVsAi,
}

/// A single game from the first move to a win or draw.
///
/// The session owns the live board; AI searches work on clones of it. After the game
/// ends every further move is rejected, and a new session is created for a rematch.
pub struct GameSession<R: RandomGenerator = StandardRandomGenerator> {
    board: Board,
    mode: GameMode,
    difficulty: Difficulty,
    search: SearchConfig,
    ai_mark: Mark,
    result: GameResult,
    random: R,
}

impl GameSession<StandardRandomGenerator> {
    /// Starts a game on an empty `size x size` board. The human plays X and moves first.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidConfiguration`] when `size` is outside `3..=9`.
    pub fn new_game(size: usize, mode: GameMode, difficulty: Difficulty) -> Result<Self, GameError> {
        Self::with_random_generator(size, mode, difficulty, StandardRandomGenerator)
    }
}

impl<R: RandomGenerator> GameSession<R> {
    /// Like [`GameSession::new_game`], drawing Easy moves from `random`.
    pub fn with_random_generator(
        size: usize,
        mode: GameMode,
        difficulty: Difficulty,
        random: R,
    ) -> Result<Self, GameError> {
        let board = Board::new(size)?;
        Ok(Self::from_board(board, mode, difficulty, random))
    }

    /// Continues a game from an existing position. The AI plays O unless changed with
    /// [`GameSession::with_ai_mark`].
    pub fn from_board(board: Board, mode: GameMode, difficulty: Difficulty, random: R) -> Self {
        let search = configure_search(difficulty, board.size());
        let result = board.evaluate();
        info!(size = board.size(), %mode, %difficulty, "new game session");
        Self {
            board,
            mode,
            difficulty,
            search,
            ai_mark: Mark::O,
            result,
            random,
        }
    }

    /// Sets the mark the AI plays in [`GameMode::PlayerVsAi`].
    pub fn with_ai_mark(mut self, mark: Mark) -> Self {
        self.ai_mark = mark;
        self
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Result after the last applied move.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Who plays this game.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The configured AI strength.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Search settings derived from the difficulty and board size.
    pub fn search_config(&self) -> SearchConfig {
        self.search
    }

    /// The mark the AI plays.
    pub fn ai_mark(&self) -> Mark {
        self.ai_mark
    }

    /// The mark to move next.
    pub fn current_player(&self) -> Mark {
        self.board.to_move()
    }

    /// Whether the AI should move now.
    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::PlayerVsAi
            && !self.result.is_over()
            && self.board.to_move() == self.ai_mark
    }

    /// Plays a human move for the mark to move.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidMove`] when the cell is off the board or taken, the game is
    /// over, or the AI is to move.
    #[instrument(level = "debug", skip(self), fields(mark = %self.board.to_move()))]
    pub fn apply_human_move(&mut self, mv: Move) -> Result<GameResult, GameError> {
        if self.is_ai_turn() {
            return Err(MoveError::OutOfTurn {
                mark: self.board.to_move(),
            }
            .into());
        }
        self.apply(mv)
    }

    /// Chooses a move for the mark to move without playing it.
    ///
    /// Easy draws a random legal move; every other level asks the minimax engine.
    /// Given the same board, difficulty and random state the answer is always the same.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidMove`] when the game is over, [`GameError::Search`] if the
    /// engine hits an inconsistent state.
    #[instrument(level = "debug", skip(self), fields(difficulty = %self.difficulty))]
    pub fn request_ai_move(&mut self) -> Result<Move, GameError> {
        if self.result.is_over() {
            return Err(MoveError::GameOver.into());
        }

        if self.search.use_random_fallback {
            return self.random_move();
        }

        let state = TicTacToeState::new(self.board.clone());
        let found = state.best_move(self.search.depth)?;
        debug!(best_move = ?found.best_move, score = found.score, "engine answered");
        match found.best_move {
            Some(mv) => Ok(mv),
            None => self.random_move(),
        }
    }

    /// Chooses and plays the AI move.
    pub fn play_ai_move(&mut self) -> Result<(Move, GameResult), GameError> {
        let mv = self.request_ai_move()?;
        let result = self.apply(mv)?;
        Ok((mv, result))
    }

    fn apply(&mut self, mv: Move) -> Result<GameResult, GameError> {
        if self.result.is_over() {
            return Err(MoveError::GameOver.into());
        }
        let mark = self.board.to_move();
        self.board.place(mv, mark)?;
        self.result = self.board.evaluate();
        debug!(%mark, %mv, result = ?self.result, "move applied");
        if self.result.is_over() {
            info!(result = ?self.result, moves = self.board.history().len(), "game over");
        }
        Ok(self.result)
    }

    fn random_move(&mut self) -> Result<Move, GameError> {
        let moves = self.board.legal_moves();
        self.random
            .choose(&moves)
            .copied()
            .ok_or(GameError::Search(SearchError::NoLegalMoves { ply: 0 }))
    }
}
