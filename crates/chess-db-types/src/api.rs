use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// -- Users --

#[derive(Debug, Deserialize)]
pub struct SetUserRequest {
    /// String or number; numbers are stringified.
    #[serde(default)]
    pub chat_id: Value,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: IndexMap<String, String>,
}

// -- Cookie --

#[derive(Debug, Deserialize)]
pub struct SetCookieRequest {
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct CookieResponse {
    pub token: String,
}

// -- Games --

#[derive(Debug, Deserialize)]
pub struct SetAllGamesRequest {
    #[serde(default = "empty_array")]
    pub games: Value,
}

#[derive(Debug, Deserialize)]
pub struct AddDoneGameRequest {
    #[serde(default)]
    pub game_id: Value,
}

#[derive(Debug, Serialize)]
pub struct GamesResponse {
    pub games: Vec<Value>,
}

fn empty_array() -> Value {
    Value::Array(Vec::new())
}

// -- Status --

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true, count: None }
    }

    pub fn with_count(count: usize) -> Self {
        Self { ok: true, count: Some(count) }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}
