//! `POST /chat`: relays one message to the completion API as an event stream

use crate::services::{relay_events, CompletionRequest};
use crate::state::AppState;
use crate::types::{AppError, ChatRequest};
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};
use serde_json::Value;

pub async fn relay_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let req = parse_chat_request(&headers, &body);
    let prompt = req.prompt().ok_or(AppError::MissingMessage)?;

    tracing::info!(
        "Received message ({} chars), user_prompt_params: {}, biz_params: {}",
        prompt.chars().count(),
        req.user_prompt_params.is_some(),
        req.biz_params.is_some()
    );

    let upstream_body = CompletionRequest::from_chat(&prompt, &req);
    let upstream = state
        .upstream
        .open_stream(&upstream_body)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let events = relay_events(upstream.bytes_stream());
    Ok((
        [
            (header::CONTENT_TYPE, "text/event-stream"),
            (header::CACHE_CONTROL, "no-cache"),
            (header::CONNECTION, "keep-alive"),
        ],
        Body::from_stream(events),
    )
        .into_response())
}

/// Decodes the body the way a lenient JSON middleware would: bodies that are
/// empty, not JSON-typed, malformed, or not a JSON object count as an empty
/// request.
fn parse_chat_request(headers: &HeaderMap, body: &[u8]) -> ChatRequest {
    if body.is_empty() || !is_json_content_type(headers) {
        return ChatRequest::default();
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::warn!("Unreadable chat request: {}", e);
            ChatRequest::default()
        }),
        Ok(_) => ChatRequest::default(),
        Err(e) => {
            tracing::warn!("Malformed JSON body: {}", e);
            ChatRequest::default()
        }
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = content_type.split(';').next().unwrap_or("").trim();
    mime.eq_ignore_ascii_case("application/json")
        || mime.to_ascii_lowercase().ends_with("+json")
}
