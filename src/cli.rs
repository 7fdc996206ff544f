//! Command-line interface for the `tictactoe` binary.

use clap::Parser;
use tictactoe_minimax::difficulty::Difficulty;
use tictactoe_minimax::session::GameMode;

/// Tic-Tac-Toe against a minimax AI on boards from 3x3 to 9x9.
///
/// Options left out on the command line are asked for interactively.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Board side length
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(3..=9))]
    pub size: Option<u8>,

    /// Play against the AI or against another person
    #[arg(short, long, value_enum)]
    pub mode: Option<GameMode>,

    /// AI strength in single-player games
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Seed for the Easy AI so games can be replayed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Let the AI play X and open the game
    #[arg(long)]
    pub ai_first: bool,

    /// Print marks without terminal colors
    #[arg(long)]
    pub no_color: bool,
}
