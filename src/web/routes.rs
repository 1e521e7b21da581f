use crate::state::AppState;
use axum::{routing::post, Router};
use tower_http::services::ServeDir;

/// Non-POST requests to `/chat` fall through to `assets` like any other path.
pub fn create_routes(state: AppState, assets: ServeDir) -> Router {
    Router::new()
        // API endpoints
        .route(
            "/chat",
            post(super::handlers::chat::relay_chat).fallback_service(assets),
        )
        .with_state(state)
}
