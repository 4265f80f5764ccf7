//! Line-oriented console driver.
//!
//! Reads one move per turn as `row,col`, applies it to the engine, and
//! reprompts on any rejection. Generic over its reader and writer so the
//! full loop runs against in-memory buffers in tests.

use super::GameDriver;
use crate::game::{Game, GameStatus, MoveError, Outcome};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Console front-end over the rule engine.
pub struct ConsoleDriver<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleDriver<R, W> {
    /// Creates a console driver reading moves from `input` and writing
    /// to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            game: Game::new(),
            input,
            output,
        }
    }

    /// Prints the board with row and column indices.
    fn print_board(&mut self) -> Result<()> {
        let rendered = self.game.board().display();
        writeln!(self.output, "\n{rendered}").context("writing board")?;
        Ok(())
    }

    /// Reads one line, returning `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line).context("reading input")?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Prompts until a well-formed `row,col` pair arrives, applies it,
    /// and reports rejections. Returns false when input ends.
    fn play_turn(&mut self) -> Result<bool> {
        let player = self.game.to_move();
        write!(
            self.output,
            "Player {player}, enter your move (row,col): "
        )?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            info!("Input closed, leaving game");
            return Ok(false);
        };

        let Some((row, col)) = parse_move(&line) else {
            writeln!(
                self.output,
                "Invalid input! Please enter in format: row,col (e.g., 1,2)"
            )?;
            return Ok(true);
        };

        match self.game.make_move(row, col) {
            Ok(()) => debug!(row, col, %player, "Move accepted"),
            Err(MoveError::SquareOccupied(_)) => {
                writeln!(self.output, "Invalid move! Cell already occupied.")?;
            }
            Err(MoveError::OutOfBounds { .. }) => {
                writeln!(
                    self.output,
                    "Invalid input! Please enter row and column between 0-2."
                )?;
            }
            // The loop stops prompting once the game is over.
            Err(MoveError::GameOver) => {}
        }
        Ok(true)
    }

    /// Prints the outcome and asks whether to play again.
    fn finish_game(&mut self) -> Result<bool> {
        self.print_board()?;

        match self.game.status() {
            GameStatus::Over(Outcome::Draw) => writeln!(self.output, "It's a tie!")?,
            GameStatus::Over(Outcome::Winner(player)) => {
                writeln!(self.output, "Player {player} wins!")?
            }
            GameStatus::InProgress => {}
        }

        write!(self.output, "Play again? (y/n): ")?;
        self.output.flush()?;

        let again = match self.read_line()? {
            Some(line) => line.trim().eq_ignore_ascii_case("y"),
            None => false,
        };
        if again {
            self.game.reset();
        }
        Ok(again)
    }
}

impl<R: BufRead, W: Write> GameDriver for ConsoleDriver<R, W> {
    #[instrument(skip(self))]
    fn run(&mut self) -> Result<()> {
        info!("Starting console game loop");
        writeln!(self.output, "Welcome to Tic-Tac-Toe!")?;
        writeln!(self.output, "Enter moves as: row,col (e.g., 1,2)")?;

        loop {
            while !self.game.is_over() {
                self.print_board()?;
                if !self.play_turn()? {
                    return Ok(());
                }
            }
            if !self.finish_game()? {
                return Ok(());
            }
        }
    }
}

/// Parses a `row,col` pair of integers. Range checking is the engine's
/// job; this only rejects malformed text.
fn parse_move(line: &str) -> Option<(usize, usize)> {
    let (row, col) = line.trim().split_once(',')?;
    Some((row.trim().parse().ok()?, col.trim().parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let mut driver = ConsoleDriver::new(Cursor::new(script.to_string()), Vec::new());
        driver.run().expect("console loop");
        String::from_utf8(driver.output).expect("utf8 output")
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("1,2"), Some((1, 2)));
        assert_eq!(parse_move(" 0 , 0 \n"), Some((0, 0)));
        assert_eq!(parse_move("7,1"), Some((7, 1)));
        assert_eq!(parse_move("1"), None);
        assert_eq!(parse_move("a,b"), None);
        assert_eq!(parse_move("1,2,3"), None);
        assert_eq!(parse_move(""), None);
    }

    #[test]
    fn test_full_game_reports_winner() {
        // X takes the top row
        let output = run_script("0,0\n1,1\n0,1\n1,0\n0,2\nn\n");
        assert!(output.contains("Player X wins!"));
        assert!(!output.contains("It's a tie!"));
    }

    #[test]
    fn test_occupied_cell_reprompts() {
        let output = run_script("1,1\n1,1\n");
        assert!(output.contains("Invalid move! Cell already occupied."));
    }

    #[test]
    fn test_malformed_and_out_of_range_input_reprompt() {
        let output = run_script("nonsense\n4,4\n");
        assert!(output.contains("Invalid input! Please enter in format: row,col (e.g., 1,2)"));
        assert!(output.contains("Invalid input! Please enter row and column between 0-2."));
    }

    #[test]
    fn test_draw_reports_tie() {
        // X O X / X O O / O X X
        let output =
            run_script("0,0\n0,1\n0,2\n1,1\n1,0\n1,2\n2,1\n2,0\n2,2\nn\n");
        assert!(output.contains("It's a tie!"));
    }

    #[test]
    fn test_play_again_resets_and_loops() {
        // Two straight X wins, then decline
        let script = "0,0\n1,1\n0,1\n1,0\n0,2\ny\n0,0\n1,1\n0,1\n1,0\n0,2\nn\n";
        let output = run_script(script);
        assert_eq!(output.matches("Player X wins!").count(), 2);
    }
}
