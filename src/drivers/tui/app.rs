//! Application state for the widget driver.

use super::input::move_cursor;
use super::score::ScoreBoard;
use crate::game::{Game, Position};
use crossterm::event::KeyCode;
use tracing::debug;

/// Whether the event loop keeps running after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Keep polling for events.
    Continue,
    /// Tear down the terminal and exit.
    Quit,
}

/// Widget driver state: the engine plus display-only concerns.
///
/// The score tally lives here, not in the engine, so the rule engine
/// stays independently testable.
pub struct App {
    game: Game,
    cursor: Position,
    score: ScoreBoard,
    status_message: String,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            score: ScoreBoard::default(),
            status_message: "Player X to move.".to_string(),
        }
    }

    /// The engine being driven.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The cell the cursor is on.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The display-only tally.
    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    /// The current status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Signal {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Signal::Quit,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Cells 1-9, row-major from the top-left.
                if let Some(digit) = c.to_digit(10)
                    && let Some(pos) = (digit as usize)
                        .checked_sub(1)
                        .and_then(Position::from_index)
                {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
        Signal::Continue
    }

    /// Applies a cell binding's move, updating the status line and tally.
    fn place(&mut self, pos: Position) {
        match self.game.place(pos) {
            Ok(()) => {
                debug!(position = %pos, "Move applied");
                match self.game.status().outcome() {
                    Some(outcome) => {
                        // One tally update per finished game; afterwards the
                        // engine rejects placements until 'n' resets it.
                        self.score.record(outcome);
                        self.status_message =
                            format!("{outcome}! Press 'n' for a new game.");
                    }
                    None => {
                        self.status_message =
                            format!("Player {} to move.", self.game.to_move());
                    }
                }
            }
            Err(err) => {
                self.status_message = err.to_string();
            }
        }
    }

    /// Starts a new game, keeping the tally.
    fn new_game(&mut self) {
        debug!("Starting new game");
        self.game.reset();
        self.cursor = Position::Center;
        self.status_message = "Player X to move.".to_string();
    }
}
