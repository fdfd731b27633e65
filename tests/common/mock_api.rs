//! Mock REST server standing in for the placeholder API.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A mock response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"error":"mock failure"}"#.to_string(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone, Default)]
struct MockState {
    /// Path and query of every request, in arrival order.
    requests: Arc<Mutex<Vec<String>>>,
    /// Responses queued per path and query.
    responses: Arc<Mutex<HashMap<String, VecDeque<MockResponse>>>>,
}

pub struct MockApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockApi {
    pub async fn start() -> Self {
        let state = MockState::default();
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .fallback(handle_request)
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Queue a response for `path_and_query` (e.g. "/albums?userId=1").
    /// Unscripted requests get a 404.
    pub async fn enqueue(&self, path_and_query: &str, resp: MockResponse) {
        self.state
            .responses
            .lock()
            .await
            .entry(path_and_query.to_string())
            .or_default()
            .push_back(resp);
    }

    pub async fn requests(&self) -> Vec<String> {
        self.state.requests.lock().await.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let key = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string());

    state.requests.lock().await.push(key.clone());

    let scripted = state
        .responses
        .lock()
        .await
        .get_mut(&key)
        .and_then(VecDeque::pop_front);

    let Some(mock) = scripted else {
        return Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("{}"))
            .unwrap();
    };

    if mock.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(mock.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(mock.status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(mock.body))
        .unwrap()
}
