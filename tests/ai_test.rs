//! Tests for the heuristic opponent's priority ladder.

use noughts::{Board, Cell, GameState, GameStatus, Mark, Opponent};

/// Builds a game from five rows of `X`, `O` and `.` characters.
fn game_from(rows: [&str; 5]) -> GameState {
    let mut board = Board::new();
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            let cell = match ch {
                'X' => Cell::X,
                'O' => Cell::O,
                _ => Cell::Empty,
            };
            board.set(row, col, cell).unwrap();
        }
    }
    GameState::restore("ai-test".to_string(), board, GameStatus::Playing, Mark::X)
}

#[test]
fn test_opponent_completes_its_own_run() {
    let game = game_from(["OO...", "XX...", ".....", ".....", "....."]);
    assert_eq!(Opponent::new().best_move(&game), Some((0, 2)));
}

#[test]
fn test_opponent_blocks_the_player() {
    let game = game_from(["XX...", "O....", ".....", ".....", "....."]);
    assert_eq!(Opponent::new().best_move(&game), Some((0, 2)));
}

#[test]
fn test_winning_beats_blocking() {
    // Both sides have an open run; the opponent takes its own win.
    let game = game_from(["XX...", ".....", ".....", ".....", "OO..."]);
    assert_eq!(Opponent::new().best_move(&game), Some((4, 2)));
}

#[test]
fn test_opponent_takes_the_center() {
    let game = game_from(["X....", ".....", ".....", ".....", "....."]);
    assert_eq!(Opponent::new().best_move(&game), Some((2, 2)));
}

#[test]
fn test_opponent_takes_the_first_corner() {
    let game = game_from([".....", ".....", "..X..", ".....", "....."]);
    assert_eq!(Opponent::new().best_move(&game), Some((0, 0)));
}

#[test]
fn test_opponent_corner_order_is_fixed() {
    let game = game_from(["O....", ".....", "..X..", ".....", "....."]);
    assert_eq!(Opponent::new().best_move(&game), Some((0, 4)));
}

#[test]
fn test_opponent_falls_back_to_first_free_cell() {
    // Center and corners occupied, no run to complete or block.
    let game = game_from(["O...O", ".....", "..X..", ".....", "O...O"]);
    assert_eq!(Opponent::new().best_move(&game), Some((0, 1)));
}

#[test]
fn test_opponent_reports_no_move_on_a_full_board() {
    let game = game_from(["XXOOX", "OOXXO", "XXOOX", "OOXXO", "XXOOX"]);
    assert_eq!(Opponent::new().best_move(&game), None);
}

#[test]
fn test_lookahead_leaves_the_board_untouched() {
    let game = game_from(["OO...", "XX...", ".....", ".....", "....."]);
    let before = game.board().clone();
    Opponent::new().best_move(&game);
    assert_eq!(game.board(), &before);
}
