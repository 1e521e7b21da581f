use crate::state::AppState;
use anyhow::Context;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub async fn start_server(state: AppState) -> anyhow::Result<()> {
    let host = state.config.host.clone();
    let port = state.config.port;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("failed to bind {}:{}", host, port))?;
    tracing::info!("http://localhost:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the router: `POST /chat` plus static assets for every other path.
pub fn create_app(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.static_dir);

    Router::new()
        .merge(crate::web::routes::create_routes(state, assets.clone()))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}
