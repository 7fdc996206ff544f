//! Maps difficulty levels to search settings.
//!
//! Depth limits are tuning values. Larger boards get lower caps since the game tree
//! grows with the number of empty cells.

use crate::error::ConfigError;
use crate::minimax::Depth;
use std::str::FromStr;

/// How strong the AI plays.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display, clap::ValueEnum,
)]
pub enum Difficulty {
    /// Uniformly random legal moves.
    #[display("easy")]
    Easy,
    /// Sees immediate wins and threats.
    #[display("medium")]
    Medium,
    /// Looks a few moves further.
    #[display("hard")]
    Hard,
    /// Perfect play on 3x3, the deepest affordable search on larger boards.
    #[display("impossible")]
    Impossible,
}

impl Difficulty {
    /// Every level, easiest first.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    /// Accepts level names in any case and the menu numbers `1` to `4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "easy" => Ok(Difficulty::Easy),
            "2" | "medium" => Ok(Difficulty::Medium),
            "3" | "hard" => Ok(Difficulty::Hard),
            "4" | "impossible" => Ok(Difficulty::Impossible),
            _ => Err(ConfigError::UnknownDifficulty {
                name: s.to_string(),
            }),
        }
    }
}

/// What the AI does to pick a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Look-ahead handed to the minimax engine.
    pub depth: Depth,
    /// Skip the engine and play a random legal move.
    pub use_random_fallback: bool,
}

const MEDIUM_DEPTH: u32 = 2;
const HARD_DEPTH: u32 = 6;

/// Deepest search allowed on a board of the given size.
pub fn depth_cap(size: usize) -> Depth {
    match size {
        0..=3 => Depth::Unbounded,
        4..=5 => Depth::Limited(4),
        6..=7 => Depth::Limited(3),
        _ => Depth::Limited(2),
    }
}

/// Search settings for `level` on a `size x size` board.
pub fn configure_search(level: Difficulty, size: usize) -> SearchConfig {
    let cap = depth_cap(size);
    match level {
        Difficulty::Easy => SearchConfig {
            depth: Depth::Limited(0),
            use_random_fallback: true,
        },
        Difficulty::Medium => SearchConfig {
            depth: Depth::Limited(MEDIUM_DEPTH).min(cap),
            use_random_fallback: false,
        },
        Difficulty::Hard => SearchConfig {
            depth: Depth::Limited(HARD_DEPTH).min(cap),
            use_random_fallback: false,
        },
        Difficulty::Impossible => SearchConfig {
            depth: cap,
            use_random_fallback: false,
        },
    }
}
