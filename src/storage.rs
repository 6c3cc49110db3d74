//! Two-tier game store: SQLite primary with an in-process fallback map.
//!
//! The store never fails a move: a primary-tier fault only degrades
//! durability, with reads and writes falling through to a process-local
//! map keyed by game id.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::db::GameRepository;
use crate::game::{Board, GameId, GameState, GameStatus, Mark};

/// Storable representation of a game.
///
/// This is the exact wire shape of persisted state: board as a 2-D array
/// of single-character strings, status and current player as strings.
/// Round-tripping through it preserves every field of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredGame {
    /// Game identifier.
    pub game_id: GameId,
    /// Board cells.
    pub board: Board,
    /// Lifecycle status.
    pub status: GameStatus,
    /// Mark nominally moving next.
    pub current_player: Mark,
}

impl From<&GameState> for StoredGame {
    fn from(game: &GameState) -> Self {
        Self {
            game_id: game.id().clone(),
            board: game.board().clone(),
            status: game.status(),
            current_player: game.current_player(),
        }
    }
}

impl From<StoredGame> for GameState {
    fn from(stored: StoredGame) -> Self {
        GameState::restore(
            stored.game_id,
            stored.board,
            stored.status,
            stored.current_player,
        )
    }
}

/// Health of the store's primary tier, reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreHealth {
    /// Primary database reachable.
    Ok,
    /// Primary database configured but unreachable; fallback in use.
    Degraded,
    /// Running on the in-process map only.
    Disabled,
}

/// Two-tier store for game state.
///
/// Constructed once at startup and shared behind an `Arc`; connections to
/// the primary tier are established per call, so there is no long-lived
/// handle to close.
#[derive(Debug)]
pub struct GameStore {
    primary: Option<GameRepository>,
    fallback: Mutex<HashMap<GameId, GameState>>,
}

impl GameStore {
    /// Opens the store described by `config`.
    ///
    /// A primary-tier failure at startup is downgraded to a warning and
    /// the store runs on the fallback map alone, so the service stays up
    /// without its database.
    #[instrument(skip(config))]
    pub fn open(config: &Config) -> Self {
        let primary = match config.database_path() {
            Some(path) => match GameRepository::new(path.clone(), *config.game_ttl_hours()) {
                Ok(repo) => {
                    if let Err(e) = repo.purge_expired() {
                        warn!(error = %e, "Failed to purge expired games at startup");
                    }
                    Some(repo)
                }
                Err(e) => {
                    warn!(error = %e, "Database unavailable, using in-memory storage only");
                    None
                }
            },
            None => None,
        };

        Self {
            primary,
            fallback: Mutex::new(HashMap::new()),
        }
    }

    /// Creates a store backed by the in-process map alone.
    pub fn in_memory() -> Self {
        Self {
            primary: None,
            fallback: Mutex::new(HashMap::new()),
        }
    }

    /// Persists a game.
    ///
    /// Never fails: a primary-tier fault is logged and the game is kept
    /// in the fallback map instead, trading durability for availability.
    #[instrument(skip_all, fields(game_id = %game.id()))]
    pub fn save(&self, game: &GameState) {
        if let Some(repo) = &self.primary {
            match serde_json::to_string(&StoredGame::from(game)) {
                Ok(state) => match repo.save(game.id(), &state) {
                    Ok(()) => return,
                    Err(e) => warn!(error = %e, "Primary save failed, using fallback map"),
                },
                Err(e) => warn!(error = %e, "Failed to serialize game, using fallback map"),
            }
        }
        self.fallback
            .lock()
            .unwrap()
            .insert(game.id().clone(), game.clone());
    }

    /// Loads a game by id.
    ///
    /// The primary tier is tried first; a miss or a fault falls through
    /// to the fallback map.
    #[instrument(skip(self))]
    pub fn load(&self, id: &str) -> Option<GameState> {
        if let Some(repo) = &self.primary {
            match repo.load(id) {
                Ok(Some(state)) => match serde_json::from_str::<StoredGame>(&state) {
                    Ok(stored) => return Some(stored.into()),
                    Err(e) => warn!(error = %e, id, "Stored game is corrupt, checking fallback"),
                },
                Ok(None) => debug!(id, "Not in primary store"),
                Err(e) => warn!(error = %e, id, "Primary load failed, checking fallback"),
            }
        }
        self.fallback.lock().unwrap().get(id).cloned()
    }

    /// Probes the primary tier.
    pub fn health(&self) -> StoreHealth {
        match &self.primary {
            None => StoreHealth::Disabled,
            Some(repo) => match repo.health_check() {
                Ok(()) => StoreHealth::Ok,
                Err(e) => {
                    warn!(error = %e, "Database health check failed");
                    StoreHealth::Degraded
                }
            },
        }
    }
}
