//! Tic-tac-toe library - one rule engine, two front-ends
//!
//! # Architecture
//!
//! - **Engine**: pure board-state machine (moves, win/draw detection, reset)
//! - **Console driver**: line-oriented read/parse/apply loop
//! - **Widget driver**: terminal cell-grid front-end with a score tally
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, GameStatus, Outcome, Player};
//!
//! let mut game = Game::new();
//! game.make_move(0, 0)?; // X
//! game.make_move(1, 1)?; // O
//! game.make_move(0, 1)?; // X
//! game.make_move(1, 0)?; // O
//! game.make_move(0, 2)?; // X takes the top row
//! assert_eq!(game.status(), GameStatus::Over(Outcome::Winner(Player::X)));
//! # Ok::<(), tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod drivers;
mod game;

// Crate-level exports - drivers
pub use drivers::{ConsoleDriver, GameDriver, TuiDriver};

// Crate-level exports - engine types
pub use game::{
    Board, Game, GameState, GameStatus, Mark, Move, MoveError, Outcome, Player, Position, Square,
};

// Crate-level exports - pure rule functions
pub use game::rules::{check_winner, is_draw, is_full};
