//! Networked 5x5 three-in-a-row game service.
//!
//! Clients play X over a small HTTP API against the built-in heuristic O
//! opponent; a player victory hands out a reward code, and finished games
//! can push a Telegram notification.
//!
//! # Architecture
//!
//! - **game**: the board, the validated move state machine, and the
//!   opponent. Pure and synchronous; the calling layer drives turn
//!   progression.
//! - **storage**: a two-tier store for game state between requests —
//!   SQLite with TTL expiry as the primary tier, an in-process map as the
//!   fallback.
//! - **server**: the axum routes orchestrating one player ply plus one
//!   opponent ply per request.
//! - **notify** / **reward**: game-end Telegram push and reward codes.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod db;
mod game;
mod notify;
mod reward;
mod server;
mod storage;

pub use config::Config;
pub use db::{DbError, GameRepository};
pub use game::{
    BOARD_SIZE, Board, Cell, GameId, GameState, GameStatus, Mark, MoveError, Opponent, WIN_LENGTH,
};
pub use notify::{Notification, Notifier};
pub use reward::generate_code;
pub use server::{AppState, GameResponse, MoveRequest, WinnerTag, router};
pub use storage::{GameStore, StoreHealth, StoredGame};
