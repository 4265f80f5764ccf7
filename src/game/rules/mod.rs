//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state according to tic-tac-toe
//! rules. Rules are separated from board storage so front-ends and the
//! engine can call them independently.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;
