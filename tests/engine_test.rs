//! Tests for the board state engine.

use tictactoe::{Game, GameStatus, MoveError, Outcome, Player, Position};

/// Applies a sequence of (row, col) moves, panicking on rejection.
fn play(game: &mut Game, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        game.make_move(row, col).expect("valid move");
    }
}

#[test]
fn test_new_game_initial_configuration() {
    let game = Game::new();
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(!game.is_over());
    assert_eq!(game.empty_cells().len(), 9);
    assert!(game.state().history().is_empty());
}

#[test]
fn test_alternation_until_terminal() {
    let mut game = Game::new();
    let expected = [Player::O, Player::X, Player::O, Player::X];
    for (i, &(row, col)) in [(0, 0), (1, 1), (0, 1), (2, 2)].iter().enumerate() {
        game.make_move(row, col).expect("valid move");
        assert_eq!(game.to_move(), expected[i]);
    }
}

#[test]
fn test_top_row_win_leaves_active_player_unchanged() {
    // (0,0)X (1,1)O (0,1)X (1,0)O (0,2)X -> top row X X X
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);

    assert!(game.is_over());
    assert_eq!(game.status(), GameStatus::Over(Outcome::Winner(Player::X)));
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.to_move(), Player::X);
}

#[test]
fn test_full_board_without_line_is_a_tie() {
    // X O X / X O O / O X X
    let mut game = Game::new();
    play(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );

    assert_eq!(game.status(), GameStatus::Over(Outcome::Draw));
    assert_eq!(game.winner(), None);
    assert!(game.empty_cells().is_empty());
}

#[test]
fn test_winning_move_on_last_cell_is_a_win_not_a_tie() {
    // X fills the middle row with the ninth mark:
    // X O O / X X X / O X O
    let mut game = Game::new();
    play(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (1, 0),
            (0, 2),
            (1, 1),
            (2, 0),
            (2, 1),
            (2, 2),
            (1, 2),
        ],
    );

    assert_eq!(game.status(), GameStatus::Over(Outcome::Winner(Player::X)));
    assert_eq!(game.to_move(), Player::X);
}

#[test]
fn test_double_move_on_center_rejected_unchanged() {
    // Move to (1,1) twice in a row
    let mut game = Game::new();
    game.make_move(1, 1).expect("valid move");
    let before = game.clone();

    let result = game.make_move(1, 1);
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(game, before);
}

#[test]
fn test_moves_after_terminal_rejected_unchanged() {
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    let before = game.clone();

    let result = game.make_move(2, 2);
    assert_eq!(result, Err(MoveError::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_out_of_range_coordinates_rejected() {
    let mut game = Game::new();
    for (row, col) in [(3, 0), (0, 3), (9, 9), (usize::MAX, 1)] {
        let result = game.make_move(row, col);
        assert_eq!(result, Err(MoveError::OutOfBounds { row, col }));
    }
    assert_eq!(game, Game::new());
}

#[test]
fn test_reset_matches_fresh_engine() {
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    assert!(game.is_over());

    game.reset();
    assert_eq!(game, Game::new());
    assert_eq!(game.state(), Game::new().state());
}

#[test]
fn test_outcome_set_once_and_stable() {
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    let outcome = game.status().outcome();
    assert_eq!(outcome, Some(Outcome::Winner(Player::X)));

    // Rejected moves never disturb the recorded outcome.
    let _ = game.make_move(2, 2);
    let _ = game.make_move(0, 0);
    assert_eq!(game.status().outcome(), outcome);
}

#[test]
fn test_state_snapshot_round_trips_through_serde() {
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 1), (2, 2)]);

    let json = serde_json::to_string(game.state()).expect("serialize state");
    let restored: tictactoe::GameState = serde_json::from_str(&json).expect("deserialize state");
    assert_eq!(&restored, game.state());
    assert_eq!(restored.history().len(), 3);
}
