//! The board state engine: move application, termination, reset.

use super::action::{Move, MoveError};
use super::position::Position;
use super::rules::{check_winner, is_full};
use super::types::{Board, GameState, GameStatus, Outcome, Player};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the single [`GameState`] and mediates every mutation. Front-ends
/// hold one engine and call [`Game::make_move`] or [`Game::place`] per
/// turn; a rejected move never changes state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player to move.
    ///
    /// When the game is over this is the player who moved last, not an
    /// invitation to move.
    pub fn to_move(&self) -> Player {
        self.state.to_move()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns true once no further moves are accepted.
    pub fn is_over(&self) -> bool {
        self.state.status() != GameStatus::InProgress
    }

    /// Returns the winner, if the game is over with one.
    pub fn winner(&self) -> Option<Player> {
        self.state.status().outcome().and_then(|o| o.winner())
    }

    /// Reinitializes to the starting configuration.
    ///
    /// Afterwards the state compares equal to a freshly constructed
    /// engine. No error conditions.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.state = GameState::new();
    }

    /// Makes a move at the given (row, col) coordinates.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] when either coordinate is outside 0-2.
    /// - [`MoveError::GameOver`] when the game is already over.
    /// - [`MoveError::SquareOccupied`] when the target cell is taken.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.place(pos)
    }

    /// Places the active player's mark at a validated position.
    ///
    /// Termination is evaluated strictly after the mark is placed, win
    /// check first: a move that completes a line and fills the last cell
    /// is a win, not a draw. The turn advances only when the game
    /// continues, so after a winning move the winner is still the active
    /// player.
    ///
    /// # Errors
    ///
    /// Same as [`Game::make_move`], minus `OutOfBounds`.
    #[instrument(skip(self), fields(player = %self.state.to_move()))]
    pub fn place(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.state.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.state.to_move();
        self.state.record_move(Move::new(player, pos));

        if let Some(winner) = check_winner(self.state.board()) {
            debug!(%winner, "Game won");
            self.state.set_status(GameStatus::Over(Outcome::Winner(winner)));
        } else if is_full(self.state.board()) {
            debug!("Board full, game drawn");
            self.state.set_status(GameStatus::Over(Outcome::Draw));
        } else {
            self.state.advance_turn();
        }

        Ok(())
    }

    /// Returns the positions currently empty.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::valid_moves(self.state.board())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_move_flips_player() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        game.make_move(1, 1).expect("valid move");
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_occupied_square_rejected_without_state_change() {
        let mut game = Game::new();
        game.make_move(1, 1).expect("valid move");
        let before = game.clone();

        let result = game.make_move(1, 1);
        assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_rejected_without_state_change() {
        let mut game = Game::new();
        let result = game.make_move(3, 0);
        assert_eq!(result, Err(MoveError::OutOfBounds { row: 3, col: 0 }));
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_empty_cells_shrink_as_marks_land() {
        let mut game = Game::new();
        assert_eq!(game.empty_cells().len(), 9);
        game.make_move(0, 0).expect("valid move");
        game.make_move(2, 2).expect("valid move");
        let empty = game.empty_cells();
        assert_eq!(empty.len(), 7);
        assert!(!empty.contains(&Position::TopLeft));
        assert!(!empty.contains(&Position::BottomRight));
    }
}
