//! Game state and the validated move mutator.

use super::board::{BOARD_SIZE, Board};
use super::types::{GameId, GameStatus, Mark};
use derive_more::{Display, Error};
use tracing::instrument;
use uuid::Uuid;

/// Reasons a move is rejected.
///
/// A rejection is the expected bad-input path, not a fault: the board is
/// left untouched and the caller reports the reason to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinates fall outside the board.
    #[display("invalid coordinates")]
    OutOfBounds,
    /// The target cell already holds a mark.
    #[display("cell is already occupied")]
    CellOccupied,
    /// The game has already finished.
    #[display("game is already finished")]
    GameFinished,
}

/// A single game: board, status, and turn bookkeeping.
///
/// The state machine is deliberately caller-driven: [`apply_move`]
/// validates and writes a mark, nothing more. Winner detection, draw
/// detection, and the one-way `Playing -> Finished` transition are
/// separate calls, so one request can apply a player move, inspect the
/// outcome, and apply the opponent's answer before committing a final
/// status.
///
/// Instances carry no internal locking; a caller owning several requests
/// against the same game must serialize them.
///
/// [`apply_move`]: GameState::apply_move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    id: GameId,
    board: Board,
    status: GameStatus,
    current_player: Mark,
}

impl GameState {
    /// Creates a new game: empty board, fresh id, player X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            board: Board::new(),
            status: GameStatus::Playing,
            current_player: Mark::X,
        }
    }

    /// Rebuilds a game from its persisted parts, preserving every field.
    pub fn restore(id: GameId, board: Board, status: GameStatus, current_player: Mark) -> Self {
        Self {
            id,
            board,
            status,
            current_player,
        }
    }

    /// The game's unique identifier.
    pub fn id(&self) -> &GameId {
        &self.id
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current lifecycle status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The mark nominally moving next.
    ///
    /// Bookkeeping only: the engine does not enforce alternation, because
    /// the calling layer directs which mark moves (player plies are X,
    /// opponent plies are O).
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Validates and applies a move, writing `mark` (or the current
    /// player's mark when `None`) into the target cell.
    ///
    /// Preconditions are checked in order: coordinates in bounds, target
    /// cell empty, game still playing. On success nothing beyond the cell
    /// write happens — no turn flip, no winner check, no status change.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] for the first failed precondition; the
    /// board is unchanged on rejection.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn apply_move(
        &mut self,
        row: usize,
        col: usize,
        mark: Option<Mark>,
    ) -> Result<(), MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds);
        }
        if !self.board.is_cell_empty(row, col) {
            return Err(MoveError::CellOccupied);
        }
        if self.status != GameStatus::Playing {
            return Err(MoveError::GameFinished);
        }

        let mark = mark.unwrap_or(self.current_player);
        // Bounds were checked above, so the write cannot fail.
        self.board
            .set(row, col, mark.into())
            .map_err(|_| MoveError::OutOfBounds)
    }

    /// Marks the game finished. One-way: a finished game never resumes.
    pub fn finish(&mut self) {
        self.status = GameStatus::Finished;
    }

    /// True when the board is full and holds no winning run.
    ///
    /// A board with any empty cell is never a draw, even if no future
    /// move could still produce a winner.
    pub fn is_draw(&self) -> bool {
        self.board.winner().is_none() && self.board.is_full()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
