//! HTTP surface: request/response types, routing, and the per-request
//! turn orchestration.
//!
//! The engine is caller-driven, so each move request runs the full
//! two-ply sequence here: apply the player's X move, check for a terminal
//! state, let the opponent answer with an O move, check again, and
//! persist after every mutation. Requests against the same game are not
//! serialized server-side; clients are expected to issue one move at a
//! time per game, and concurrent writers degrade to last-write-wins.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::game::{BOARD_SIZE, Board, GameId, GameState, GameStatus, Mark, Opponent};
use crate::notify::{Notification, Notifier};
use crate::reward;
use crate::storage::{GameStore, StoreHealth};

/// Body of `POST /api/game/move`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Game to play on.
    pub game_id: GameId,
    /// Target row, `0..5`.
    pub row: i32,
    /// Target column, `0..5`.
    pub col: i32,
    /// Optional chat to notify when this move ends the game.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
}

/// Which side a finished game went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinnerTag {
    /// The human player completed a run.
    Player,
    /// The computer opponent completed a run.
    Ai,
    /// Board full, no run.
    Draw,
}

/// Response shape shared by every game endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResponse {
    /// Game identifier.
    pub game_id: GameId,
    /// Full board, rows of single-character strings.
    pub board: Board,
    /// Lifecycle status.
    pub status: GameStatus,
    /// Present once the game finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<WinnerTag>,
    /// Reward code, present on a player victory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promocode: Option<String>,
    /// Human-readable outcome message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl GameResponse {
    /// Plain snapshot of a game with no outcome decoration.
    fn snapshot(game: &GameState) -> Self {
        Self {
            game_id: game.id().clone(),
            board: game.board().clone(),
            status: game.status(),
            winner: None,
            promocode: None,
            message: None,
        }
    }
}

/// Error response carrying the `{"detail": ...}` body shape.
#[derive(Debug, Clone)]
struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }

    fn not_found(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Two-tier game store.
    pub store: Arc<GameStore>,
    /// Game-end notifier.
    pub notifier: Notifier,
}

/// Builds the service router with CORS and request tracing attached.
pub fn router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/game/start", post(start_game))
        .route("/api/game/move", post(make_move))
        .route("/api/game/{game_id}", get(get_game))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Service banner.
async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "noughts API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Health probe covering the primary store.
#[instrument(skip_all)]
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let (status, database) = match state.store.health() {
        StoreHealth::Ok => ("ok", "ok"),
        StoreHealth::Degraded => ("degraded", "error"),
        StoreHealth::Disabled => ("ok", "disabled"),
    };
    Json(json!({ "status": status, "checks": { "database": database } }))
}

/// Creates a new game and persists its initial state.
#[instrument(skip_all)]
async fn start_game(State(state): State<AppState>) -> Json<GameResponse> {
    let game = GameState::new();
    state.store.save(&game);
    info!(game_id = %game.id(), "New game created");
    Json(GameResponse::snapshot(&game))
}

/// Returns the current state of a game.
#[instrument(skip_all, fields(game_id = %game_id))]
async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
) -> Result<Json<GameResponse>, ApiError> {
    let game = state
        .store
        .load(&game_id)
        .ok_or_else(|| ApiError::not_found("Game not found"))?;
    Ok(Json(GameResponse::snapshot(&game)))
}

/// Applies one player move and, when the game continues, one opponent
/// move.
#[instrument(
    skip_all,
    fields(game_id = %request.game_id, row = request.row, col = request.col)
)]
async fn make_move(
    State(state): State<AppState>,
    Json(request): Json<MoveRequest>,
) -> Result<Json<GameResponse>, ApiError> {
    if request.game_id.is_empty() {
        return Err(ApiError::bad_request("game_id is required"));
    }
    let (row, col) = parse_coordinates(request.row, request.col)?;
    let chat_id = request.chat_id.as_deref();

    let mut game = state
        .store
        .load(&request.game_id)
        .ok_or_else(|| ApiError::not_found("Game not found"))?;

    if game.status() != GameStatus::Playing {
        return Err(ApiError::bad_request("Game is already finished"));
    }

    // Player ply, always X.
    game.apply_move(row, col, Some(Mark::X))
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    state.store.save(&game);
    info!("Player move applied");

    if game.board().winner() == Some(Mark::X) {
        game.finish();
        let code = reward::generate_code();
        state.store.save(&game);
        notify(
            &state,
            chat_id,
            Notification::Victory { code: code.clone() },
        )
        .await;
        info!(promocode = %code, "Player won");
        return Ok(Json(GameResponse {
            winner: Some(WinnerTag::Player),
            promocode: Some(code),
            message: Some("🎉 Congratulations, you won!".to_string()),
            ..GameResponse::snapshot(&game)
        }));
    }

    if game.is_draw() {
        return Ok(Json(finish_draw(&state, &mut game, chat_id).await));
    }

    // Opponent ply, always O.
    let opponent = Opponent::new();
    if let Some((ai_row, ai_col)) = opponent.best_move(&game) {
        match game.apply_move(ai_row, ai_col, Some(opponent.mark())) {
            Ok(()) => {
                state.store.save(&game);
                info!(row = ai_row, col = ai_col, "Opponent move applied");

                if game.board().winner() == Some(opponent.mark()) {
                    game.finish();
                    state.store.save(&game);
                    notify(&state, chat_id, Notification::Defeat).await;
                    info!("Opponent won");
                    return Ok(Json(GameResponse {
                        winner: Some(WinnerTag::Ai),
                        message: Some("😔 The computer won".to_string()),
                        ..GameResponse::snapshot(&game)
                    }));
                }

                if game.is_draw() {
                    return Ok(Json(finish_draw(&state, &mut game, chat_id).await));
                }
            }
            // The opponent only proposes empty in-bounds cells; a
            // rejection means it passes rather than failing the player's
            // already-applied move.
            Err(e) => warn!(error = %e, "Opponent move rejected"),
        }
    }

    state.store.save(&game);
    Ok(Json(GameResponse::snapshot(&game)))
}

/// Finishes a drawn game, persists it, and notifies the player.
async fn finish_draw(state: &AppState, game: &mut GameState, chat_id: Option<&str>) -> GameResponse {
    game.finish();
    state.store.save(game);
    notify(state, chat_id, Notification::Draw).await;
    info!(game_id = %game.id(), "Game drawn");
    GameResponse {
        winner: Some(WinnerTag::Draw),
        message: Some("🤝 It's a draw!".to_string()),
        ..GameResponse::snapshot(game)
    }
}

/// Sends a notification if a chat id was supplied; failures only warn.
async fn notify(state: &AppState, chat_id: Option<&str>, notification: Notification) {
    let Some(chat_id) = chat_id else { return };
    if let Err(e) = state.notifier.send(chat_id, &notification).await {
        warn!(error = %e, "Failed to deliver notification");
    }
}

/// Validates wire coordinates against the board bounds.
fn parse_coordinates(row: i32, col: i32) -> Result<(usize, usize), ApiError> {
    let bounds = 0..BOARD_SIZE as i32;
    if !bounds.contains(&row) || !bounds.contains(&col) {
        return Err(ApiError::bad_request(format!(
            "Invalid coordinates, row and col must be in 0..{BOARD_SIZE}"
        )));
    }
    Ok((row as usize, col as usize))
}
