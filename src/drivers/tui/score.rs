//! Display-only score tally owned by the widget driver.

use crate::game::{Outcome, Player};
use derive_getters::Getters;

/// Win/loss/tie tally across games in one sitting.
///
/// Not part of engine state; resetting the engine leaves it untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct ScoreBoard {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    ties: u32,
}

impl ScoreBoard {
    /// Records one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::X) => self.x_wins += 1,
            Outcome::Winner(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.ties += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let score = ScoreBoard::default();
        assert_eq!((*score.x_wins(), *score.o_wins(), *score.ties()), (0, 0, 0));
    }

    #[test]
    fn test_record_each_outcome() {
        let mut score = ScoreBoard::default();
        score.record(Outcome::Winner(Player::X));
        score.record(Outcome::Winner(Player::O));
        score.record(Outcome::Draw);
        score.record(Outcome::Draw);
        assert_eq!(*score.x_wins(), 1);
        assert_eq!(*score.o_wins(), 1);
        assert_eq!(*score.ties(), 2);
    }
}
