// Mock completion API: counts calls, records what it received and replays
// a scripted response.
#![allow(dead_code)]

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use axum::{
    body::{Body, Bytes},
    extract::{Json, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use futures::stream::{self, StreamExt};
use serde_json::{json, Value};

#[derive(Clone, Debug)]
pub enum Script {
    /// 200 with these chunks, each sent after a short pause.
    Chunks(Vec<String>),
    /// The chunks, then an aborted body.
    ChunksThenAbort(Vec<String>),
    /// A plain error status before any streaming.
    Status(u16),
}

#[derive(Debug, Clone)]
pub struct Received {
    pub app_id: String,
    pub headers: HeaderMap,
    pub body: Value,
}

struct Inner {
    script: Script,
    calls: AtomicUsize,
    received: Mutex<Vec<Received>>,
}

pub struct MockUpstream {
    inner: Arc<Inner>,
    url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl MockUpstream {
    pub async fn start(script: Script) -> Self {
        let inner = Arc::new(Inner {
            script,
            calls: AtomicUsize::new(0),
            received: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/api/v1/apps/{app_id}/completion", post(completion_handler))
            .with_state(inner.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Mock upstream error: {}", e);
            }
        });

        Self {
            inner,
            url: format!("http://{}", addr),
            handle,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<Received> {
        self.inner.received.lock().unwrap().last().cloned()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn completion_handler(
    State(inner): State<Arc<Inner>>,
    Path(app_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    inner.calls.fetch_add(1, Ordering::SeqCst);
    inner.received.lock().unwrap().push(Received {
        app_id,
        headers,
        body,
    });

    match inner.script.clone() {
        Script::Status(code) => (
            StatusCode::from_u16(code).unwrap(),
            Json(json!({ "code": "Throttling", "message": "try later" })),
        )
            .into_response(),
        Script::Chunks(chunks) => streamed(chunks, false),
        Script::ChunksThenAbort(chunks) => streamed(chunks, true),
    }
}

fn streamed(chunks: Vec<String>, abort: bool) -> Response {
    let body = stream::iter(chunks)
        .map(Ok::<_, std::io::Error>)
        .chain(stream::iter(abort.then(|| {
            Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "upstream went away",
            ))
        })))
        .then(|item| async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            item.map(Bytes::from)
        });

    (
        [("content-type", "text/event-stream")],
        Body::from_stream(body),
    )
        .into_response()
}
