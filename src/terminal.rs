//! Prompts and board rendering for the interactive game.

use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};
use tictactoe_minimax::board::{Board, MAX_SIZE, MIN_SIZE, Mark, Move};
use tictactoe_minimax::difficulty::Difficulty;
use tictactoe_minimax::session::GameMode;

const CENTER_WIDTH: usize = 60;

/// Line-based terminal I/O over any reader and writer.
pub struct Terminal<R: BufRead, W: Write> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    pub fn say(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", message.as_ref())
    }

    pub fn intro(&mut self) -> io::Result<()> {
        let divider = "=".repeat(CENTER_WIDTH);
        writeln!(self.output, "{divider}\n")?;
        writeln!(self.output, "{:^CENTER_WIDTH$}\n", "TIC-TAC-TOE")?;
        writeln!(self.output, "{divider}\n")?;
        writeln!(
            self.output,
            "{:^CENTER_WIDTH$}\n",
            "Fill a whole row, column or diagonal with your marks."
        )
    }

    pub fn divider(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", "=".repeat(CENTER_WIDTH))
    }

    pub fn prompt_mode(&mut self) -> io::Result<GameMode> {
        writeln!(self.output, "{:^CENTER_WIDTH$}", "Select mode:")?;
        writeln!(self.output, "1. Play against computer")?;
        writeln!(self.output, "2. Two players")?;
        loop {
            match self.ask("\nSelect 1 or 2: ")?.as_str() {
                "1" => return Ok(GameMode::PlayerVsAi),
                "2" => return Ok(GameMode::PlayerVsPlayer),
                _ => self.say("Probably typo. Try again.")?,
            }
        }
    }

    pub fn prompt_difficulty(&mut self) -> io::Result<Difficulty> {
        writeln!(self.output, "\n{:^CENTER_WIDTH$}", "Select difficulty:")?;
        writeln!(self.output, "1. Easy\n2. Medium\n3. Hard\n4. Impossible")?;
        loop {
            let answer = self.ask("\nSelect 1 - 4: ")?;
            match answer.parse::<Difficulty>() {
                Ok(difficulty) => return Ok(difficulty),
                Err(_) => self.say("Probably typo. Try again.")?,
            }
        }
    }

    pub fn prompt_size(&mut self) -> io::Result<usize> {
        loop {
            let answer = self.ask(&format!(
                "\nSelect board size (min. {MIN_SIZE}, max. {MAX_SIZE} for {MAX_SIZE}x{MAX_SIZE} board): "
            ))?;
            match answer.parse::<usize>() {
                Ok(size) if (MIN_SIZE..=MAX_SIZE).contains(&size) => return Ok(size),
                _ => self.say(format!("Size must be between {MIN_SIZE} and {MAX_SIZE}."))?,
            }
        }
    }

    /// Asks `mark` for a cell number until it names a free cell.
    pub fn prompt_move(&mut self, board: &Board, mark: Mark) -> io::Result<Move> {
        let size = board.size();
        let last = size * size;
        loop {
            let answer = self.ask(&format!(
                "It's your turn, player {mark}! Select 1 - {last}: "
            ))?;
            let Some(mv) = answer
                .parse::<usize>()
                .ok()
                .and_then(|number| Move::from_cell_number(number, size))
            else {
                self.say("Probably typo. Try again.")?;
                continue;
            };
            match board.cell(mv) {
                Some(None) => return Ok(mv),
                _ => self.say("Spot already taken. Try again.")?,
            }
        }
    }

    pub fn ask_to_continue(&mut self) -> io::Result<bool> {
        loop {
            let answer = self.ask(&format!(
                "\n{:^CENTER_WIDTH$}\n",
                "Play again? (y/n):"
            ))?;
            match answer.to_ascii_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say("\nPlease enter y or n: ")?,
            }
        }
    }

    pub fn show_board(&mut self, board: &Board) -> io::Result<()> {
        let rendered = render_board(board, self.color);
        writeln!(self.output, "\n{rendered}")
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }
}

/// Draws the board as a boxed grid; empty cells show their 1-based number.
pub fn render_board(board: &Board, color: bool) -> String {
    let size = board.size();
    let border = format!("{}+", "+----".repeat(size));
    let mut out = String::new();
    for row in 0..size {
        let cells: Vec<String> = (0..size)
            .map(|col| {
                let mv = Move::new(row, col);
                match board.cell(mv).flatten() {
                    None => format!("{:>2}", mv.cell_number(size)),
                    Some(mark) => paint(mark, color),
                }
            })
            .collect();
        out.push_str(&border);
        out.push('\n');
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    out.push_str(&border);
    out.push('\n');
    out
}

fn paint(mark: Mark, color: bool) -> String {
    let cell = format!("{:>2}", mark.to_string());
    if !color {
        return cell;
    }
    match mark {
        Mark::X => cell.red().bold().to_string(),
        Mark::O => cell.green().bold().to_string(),
    }
}
