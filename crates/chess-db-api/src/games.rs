use axum::{Json, extract::State};
use serde_json::Value;
use tracing::info;

use chess_db_store::DocumentStore;
use chess_db_types::api::{AddDoneGameRequest, GamesResponse, OkResponse, SetAllGamesRequest};
use chess_db_types::models::is_falsy;

use crate::AppState;
use crate::error::ApiError;
use crate::extract::JsonBody;

// ── All games ───────────────────────────────────────────────────────────

/// GET /api/all_games
pub async fn get_all_games<S: DocumentStore>(State(state): State<AppState<S>>) -> Json<GamesResponse> {
    let doc = state.store.load().await;
    Json(GamesResponse { games: doc.all_games })
}

/// POST /api/all_games — replace the whole list. No merge, no de-dup.
pub async fn set_all_games<S: DocumentStore>(
    State(state): State<AppState<S>>,
    JsonBody(req): JsonBody<SetAllGamesRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let Value::Array(games) = req.games else {
        return Err(ApiError::bad_request("games must be a list"));
    };

    let count = games.len();
    let mut doc = state.store.load().await;
    doc.all_games = games;
    state.store.save(&doc).await?;

    info!("Replaced all_games with {} records", count);
    Ok(Json(OkResponse::with_count(count)))
}

// ── Done games ──────────────────────────────────────────────────────────

/// GET /api/done_games
pub async fn get_done_games<S: DocumentStore>(State(state): State<AppState<S>>) -> Json<GamesResponse> {
    let doc = state.store.load().await;
    Json(GamesResponse { games: doc.done_games })
}

/// POST /api/done_games/add — idempotent append.
///
/// The document is saved even when the id was already present.
pub async fn add_done_game<S: DocumentStore>(
    State(state): State<AppState<S>>,
    JsonBody(req): JsonBody<AddDoneGameRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    if is_falsy(&req.game_id) {
        return Err(ApiError::bad_request("missing game_id"));
    }

    let game_id = req.game_id;
    let mut doc = state.store.load().await;
    let added = doc.add_done_game(game_id.clone());
    state.store.save(&doc).await?;

    let count = doc.done_games.len();
    if added {
        info!("Game {} marked done ({} total)", game_id, count);
    } else {
        info!("Game {} already done ({} total)", game_id, count);
    }
    Ok(Json(OkResponse::with_count(count)))
}
