// Shared fixtures for the integration tests
#![allow(dead_code)]

pub mod mock_upstream;

use std::path::PathBuf;

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sse_chat_relay::{create_app, AppState, Config};
use tower::ServiceExt;

/// Builds the relay router against `upstream_url`, serving assets from
/// `static_dir`.
pub fn relay_app(upstream_url: &str, static_dir: &std::path::Path) -> Router {
    let yaml = format!(
        "port: 0\ndashscope_key: sk-test\napp_id: app-42\nworkspace_id: ws-test\nupstream_base_url: {}\nstatic_dir: {}\n",
        upstream_url,
        static_dir.display()
    );
    let config = Config::from_yaml_str(&yaml).expect("valid test config");
    let state = AppState::new(config).expect("state");
    create_app(state)
}

/// A scratch directory unique to this process and `name`.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sse-chat-relay-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

pub async fn post_chat(app: Router, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}
