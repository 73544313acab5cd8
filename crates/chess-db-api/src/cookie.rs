use axum::{Json, extract::State};
use tracing::info;

use chess_db_store::DocumentStore;
use chess_db_types::api::{CookieResponse, OkResponse, SetCookieRequest};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::JsonBody;

/// GET /api/cookie
pub async fn get_cookie<S: DocumentStore>(State(state): State<AppState<S>>) -> Json<CookieResponse> {
    let doc = state.store.load().await;
    Json(CookieResponse { token: doc.cookie })
}

/// POST /api/cookie — any string is accepted, including "".
pub async fn set_cookie<S: DocumentStore>(
    State(state): State<AppState<S>>,
    JsonBody(req): JsonBody<SetCookieRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let mut doc = state.store.load().await;
    doc.cookie = req.token;
    state.store.save(&doc).await?;

    info!("Cookie updated ({} chars)", doc.cookie.chars().count());
    Ok(Json(OkResponse::ok()))
}
