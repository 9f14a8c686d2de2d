//! Shared mock-backend harness for query integration tests.
//!
//! Spawns a real axum server on an ephemeral port so the reqwest-based
//! client exercises the same HTTP path production uses. Responses are
//! scripted per `"METHOD /path"` key; the last scripted response is
//! sticky, earlier ones are consumed in order. Every request bumps a
//! per-key hit counter.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::Value;

#[derive(Clone, Default)]
pub struct MockBackend {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    hits: Mutex<HashMap<String, usize>>,
    scripts: Mutex<HashMap<String, Vec<(u16, Value)>>>,
}

impl MockBackend {
    /// Spawn the server; returns the backend handle and its base URL.
    pub async fn spawn() -> (MockBackend, String) {
        let backend = MockBackend::default();
        let app = Router::new()
            .fallback(handle)
            .with_state(backend.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server");
        });
        (backend, format!("http://{addr}"))
    }

    /// Script one sticky response for `"METHOD /path"`.
    pub fn stub(&self, key: &str, status: u16, body: Value) {
        self.stub_sequence(key, vec![(status, body)]);
    }

    /// Script a sequence of responses; the last one is sticky.
    pub fn stub_sequence(&self, key: &str, responses: Vec<(u16, Value)>) {
        self.inner
            .scripts
            .lock()
            .expect("scripts lock")
            .insert(key.to_string(), responses);
    }

    /// How many requests hit `"METHOD /path"`.
    pub fn hits(&self, key: &str) -> usize {
        *self
            .inner
            .hits
            .lock()
            .expect("hits lock")
            .get(key)
            .unwrap_or(&0)
    }
}

async fn handle(
    State(backend): State<MockBackend>,
    method: Method,
    uri: Uri,
) -> impl IntoResponse {
    let key = format!("{} {}", method, uri.path());

    *backend
        .inner
        .hits
        .lock()
        .expect("hits lock")
        .entry(key.clone())
        .or_insert(0) += 1;

    let mut scripts = backend.inner.scripts.lock().expect("scripts lock");
    match scripts.get_mut(&key) {
        Some(responses) => {
            let (status, body) = if responses.len() > 1 {
                responses.remove(0)
            } else {
                responses[0].clone()
            };
            (
                StatusCode::from_u16(status).expect("valid status"),
                Json(body),
            )
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "no stub", "key": key})),
        ),
    }
}
