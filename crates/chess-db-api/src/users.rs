use axum::{Json, extract::State};
use serde_json::Value;
use tracing::info;

use chess_db_store::DocumentStore;
use chess_db_types::api::{OkResponse, SetUserRequest, UsersResponse};
use chess_db_types::models::normalize_username;

use crate::AppState;
use crate::error::ApiError;
use crate::extract::JsonBody;

/// GET /api/users
pub async fn get_users<S: DocumentStore>(State(state): State<AppState<S>>) -> Json<UsersResponse> {
    let doc = state.store.load().await;
    Json(UsersResponse { users: doc.users })
}

/// POST /api/users — upsert `chat_id -> username`.
pub async fn set_user<S: DocumentStore>(
    State(state): State<AppState<S>>,
    JsonBody(req): JsonBody<SetUserRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let chat_id = chat_id_key(&req.chat_id);
    let username = req.username.as_deref().and_then(normalize_username);

    let (Some(chat_id), Some(username)) = (chat_id, username) else {
        return Err(ApiError::bad_request("missing chat_id or username"));
    };

    let mut doc = state.store.load().await;
    doc.set_user(chat_id.clone(), username.clone());
    state.store.save(&doc).await?;

    info!("User {} registered as {}", chat_id, username);
    Ok(Json(OkResponse::ok()))
}

/// Telegram chat ids arrive as numbers or strings.
fn chat_id_key(value: &Value) -> Option<String> {
    let key = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if key.is_empty() { None } else { Some(key) }
}
