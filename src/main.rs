//! Terminal Tic-Tac-Toe against a minimax AI.

mod cli;
mod terminal;

use clap::Parser;
use cli::Cli;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use terminal::Terminal;
use tictactoe_minimax::board::{GameResult, Mark};
use tictactoe_minimax::difficulty::Difficulty;
use tictactoe_minimax::error::GameError;
use tictactoe_minimax::random::{CustomNumberGenerator, RandomGenerator, StandardRandomGenerator};
use tictactoe_minimax::session::{GameMode, GameSession};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout(), !cli.no_color);

    match run(&cli, &mut terminal) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            info!("input closed, leaving");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "terminal failure");
            ExitCode::FAILURE
        }
    }
}

fn run<R: BufRead, W: Write>(cli: &Cli, terminal: &mut Terminal<R, W>) -> io::Result<()> {
    terminal.intro()?;
    loop {
        let mode = match cli.mode {
            Some(mode) => mode,
            None => terminal.prompt_mode()?,
        };
        let difficulty = match (mode, cli.difficulty) {
            (GameMode::PlayerVsPlayer, _) => Difficulty::Easy,
            (GameMode::PlayerVsAi, Some(difficulty)) => difficulty,
            (GameMode::PlayerVsAi, None) => terminal.prompt_difficulty()?,
        };
        let size = match cli.size {
            Some(size) => usize::from(size),
            None => terminal.prompt_size()?,
        };
        let ai_mark = if cli.ai_first { Mark::X } else { Mark::O };

        match cli.seed {
            Some(seed) => {
                let random = CustomNumberGenerator::new(seed as i64);
                let session = GameSession::with_random_generator(size, mode, difficulty, random);
                play_game(terminal, session, ai_mark)?;
            }
            None => {
                let random = StandardRandomGenerator;
                let session = GameSession::with_random_generator(size, mode, difficulty, random);
                play_game(terminal, session, ai_mark)?;
            }
        }

        terminal.divider()?;
        if !terminal.ask_to_continue()? {
            terminal.say("Thanks for playing!")?;
            return Ok(());
        }
    }
}

fn play_game<R, W, G>(
    terminal: &mut Terminal<R, W>,
    session: Result<GameSession<G>, GameError>,
    ai_mark: Mark,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    G: RandomGenerator,
{
    let mut session = match session {
        Ok(session) => session.with_ai_mark(ai_mark),
        Err(err) => return terminal.say(err.to_string()),
    };

    terminal.show_board(session.board())?;
    while !session.result().is_over() {
        if session.is_ai_turn() {
            terminal.say("Let me think... please wait.")?;
            match session.play_ai_move() {
                Ok((mv, _)) => {
                    let number = mv.cell_number(session.board().size());
                    terminal.say(format!("AI selected {number}"))?;
                }
                Err(err) => {
                    error!(%err, "AI could not move");
                    return terminal.say(format!("The AI gave up: {err}"));
                }
            }
        } else {
            let mark = session.current_player();
            let mv = terminal.prompt_move(session.board(), mark)?;
            if let Err(err) = session.apply_human_move(mv) {
                terminal.say(err.to_string())?;
                continue;
            }
        }
        terminal.show_board(session.board())?;
    }

    let message = match (session.result(), session.mode()) {
        (GameResult::Win(mark), GameMode::PlayerVsAi) if mark == session.ai_mark() => {
            "🎉 AI wins! 🎉".to_string()
        }
        (GameResult::Win(_), GameMode::PlayerVsAi) => "🎉 You win! 🎉".to_string(),
        (GameResult::Win(mark), GameMode::PlayerVsPlayer) => format!("🎉 Player {mark} wins! 🎉"),
        _ => "It's a draw!".to_string(),
    };
    terminal.say(message)
}
