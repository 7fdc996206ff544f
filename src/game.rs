/// The capability contract the minimax engine searches over.
///
/// To let the engine play a custom game, implement this trait for the game's state type.
/// The engine never mutates the caller's state: every successor is produced by cloning
/// the parent and calling [`Game::perform_move`] on the clone.
pub trait Game: Clone {
    /// The type representing a move in the game. This could be a cell index or a
    /// coordinate pair for placement games.
    type Move: Clone;

    /// Returns all legal moves from the current state, in a stable canonical order.
    ///
    /// Ties between equally scored moves are broken in favour of the earliest one in
    /// this list, so the order must not depend on anything but the state itself.
    fn get_available_moves(&self) -> Vec<Self::Move>;

    /// Applies a move returned by [`Game::get_available_moves`] to this state.
    fn perform_move(&mut self, mv: &Self::Move);

    /// Returns the current outcome of the game from the maximizing player's perspective.
    fn get_outcome(&self) -> GameOutcome;

    /// Whether the game has ended.
    fn is_terminal(&self) -> bool {
        self.get_outcome() != GameOutcome::InProgress
    }

    /// Scores the state for the maximizing player.
    ///
    /// `ply` is the distance from the search root. Called for terminal states and for
    /// states where the depth limit cut the search off.
    fn evaluate(&self, ply: u32) -> Score;
}

/// Scores are plain integers: positive favours the maximizing player.
pub type Score = i32;

/// Magnitude of a decided game before ply adjustment.
pub const WIN_SCORE: Score = 1_000;

/// Represents the possible outcomes of a game.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameOutcome {
    /// The game is still ongoing.
    InProgress = 0,
    /// The maximizing player has won.
    Win = 1,
    /// The maximizing player has lost.
    Lose = 2,
    /// The game has ended in a draw.
    Draw = 3,
}

impl GameOutcome {
    /// Standard terminal score reached `ply` half-moves below the root.
    ///
    /// Wins found sooner score higher and losses found later score higher, so the
    /// engine prefers the shallowest win and the deepest loss. Non-terminal outcomes
    /// score 0.
    pub fn score(self, ply: u32) -> Score {
        let ply = ply.min(WIN_SCORE as u32 - 1) as Score;
        match self {
            GameOutcome::Win => WIN_SCORE - ply,
            GameOutcome::Lose => -WIN_SCORE + ply,
            GameOutcome::Draw | GameOutcome::InProgress => 0,
        }
    }
}
