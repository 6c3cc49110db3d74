//! Heuristic computer opponent.

use super::board::{BOARD_SIZE, Board};
use super::state::GameState;
use super::types::Mark;
use tracing::{debug, instrument};

/// Corner cells, probed in this fixed order.
const CORNERS: [(usize, usize); 4] = [
    (0, 0),
    (0, BOARD_SIZE - 1),
    (BOARD_SIZE - 1, 0),
    (BOARD_SIZE - 1, BOARD_SIZE - 1),
];

/// Single-ply heuristic opponent playing O.
///
/// Move selection walks a fixed priority ladder: complete an own run,
/// block the player's run, take the center, take the first free corner,
/// take the first free cell. The ladder is the observable contract — it
/// performs no deeper search and must not be turned into one.
#[derive(Debug, Clone, Copy)]
pub struct Opponent {
    mark: Mark,
}

impl Opponent {
    /// Creates the opponent with its fixed mark, O.
    pub fn new() -> Self {
        Self { mark: Mark::O }
    }

    /// The mark this opponent plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Picks a move for the current board.
    ///
    /// Returns `None` only when the board has no empty cell left; callers
    /// treat that as the draw already being on the board, not as an error.
    #[instrument(skip_all, fields(game_id = %state.id()))]
    pub fn best_move(&self, state: &GameState) -> Option<(usize, usize)> {
        let board = state.board();

        if let Some((row, col)) = winning_cell(board, self.mark) {
            debug!(row, col, "completing own run");
            return Some((row, col));
        }

        if let Some((row, col)) = winning_cell(board, self.mark.opponent()) {
            debug!(row, col, "blocking the player");
            return Some((row, col));
        }

        let center = BOARD_SIZE / 2;
        if board.is_cell_empty(center, center) {
            debug!("taking the center");
            return Some((center, center));
        }

        for (row, col) in CORNERS {
            if board.is_cell_empty(row, col) {
                debug!(row, col, "taking a corner");
                return Some((row, col));
            }
        }

        let fallback = board.empty_cells().into_iter().next();
        debug!(cell = ?fallback, "falling back to first free cell");
        fallback
    }
}

impl Default for Opponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the first empty cell (row-major) where placing `mark` would
/// complete a run.
///
/// Each probe evaluates a what-if copy of the board, so no speculative
/// mutation can leak into the live game.
fn winning_cell(board: &Board, mark: Mark) -> Option<(usize, usize)> {
    for (row, col) in board.empty_cells() {
        let mut probe = board.clone();
        if probe.set(row, col, mark.into()).is_ok() && probe.winner() == Some(mark) {
            return Some((row, col));
        }
    }
    None
}
