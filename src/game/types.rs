//! Core domain types for the 5x5 game.

use serde::{Deserialize, Serialize};

/// A player mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The human player (moves first).
    X,
    /// The computer opponent.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell of the board.
///
/// Serializes as a single-character string (`""`, `"X"`, `"O"`), so a
/// whole board round-trips as a 2-D array of strings — the shape both the
/// move API and the storage layer speak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied cell.
    #[default]
    #[serde(rename = "")]
    Empty,
    /// Cell holding an X.
    X,
    /// Cell holding an O.
    O,
}

impl Cell {
    /// True if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The mark occupying this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// Lifecycle status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Moves are still accepted.
    Playing,
    /// A win or draw was recorded; no further moves are accepted.
    Finished,
}

/// Unique identifier for a game (UUID v4 text).
pub type GameId = String;
