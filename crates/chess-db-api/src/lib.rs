pub mod cookie;
pub mod error;
pub mod extract;
pub mod games;
pub mod users;

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use chess_db_store::DocumentStore;

/// Shared state for all route handlers. Holds no document, only the store.
pub struct AppState<S> {
    pub store: Arc<S>,
}

impl<S: DocumentStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self { store: Arc::new(store) }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

pub const LIVENESS_TEXT: &str = "✅ Chess DB API is running";

/// Build the full HTTP surface, with CORS open to every origin.
///
/// Bodies are not size-limited: `all_games` uploads are whole game lists.
pub fn router<S: DocumentStore + 'static>(state: AppState<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(index))
        .route("/api/users", get(users::get_users::<S>).post(users::set_user::<S>))
        .route("/api/cookie", get(cookie::get_cookie::<S>).post(cookie::set_cookie::<S>))
        .route(
            "/api/all_games",
            get(games::get_all_games::<S>).post(games::set_all_games::<S>),
        )
        .route("/api/done_games", get(games::get_done_games::<S>))
        .route("/api/done_games/add", post(games::add_done_game::<S>))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> &'static str {
    LIVENESS_TEXT
}
