use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use chess_db_store::StoreError;
use chess_db_types::api::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or malformed input. Nothing was persisted.
    #[error("{0}")]
    BadRequest(String),
    /// Body exceeded a size limit set outside the router.
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => {
                warn!("Rejected request: {}", message);
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::PayloadTooLarge(message) => {
                warn!("Rejected oversized body: {}", message);
                (StatusCode::PAYLOAD_TOO_LARGE, message)
            }
            ApiError::Storage(e) => {
                // Details stay in the log.
                error!("Storage failure: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "storage failure".to_string())
            }
        };

        (status, Json(ErrorResponse { ok: false, error: message })).into_response()
    }
}
