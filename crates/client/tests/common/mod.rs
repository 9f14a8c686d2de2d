//! Shared mock-backend harness for client integration tests.
//!
//! Unlike the query-layer harness, this one records each request
//! (method, path, query string, cookie and correlation headers) so
//! tests can assert on what actually went over the wire.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::Value;

/// One observed request.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub cookie: Option<String>,
    pub request_id: Option<String>,
}

#[derive(Clone, Default)]
pub struct MockBackend {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    requests: Mutex<Vec<Recorded>>,
    response: Mutex<Option<(u16, Value)>>,
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

    /// Set the response returned to every request.
    pub fn respond(&self, status: u16, body: Value) {
        *self.inner.response.lock().expect("response lock") = Some((status, body));
    }

    /// All requests observed so far.
    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.requests.lock().expect("requests lock").clone()
    }

    /// The single observed request; panics if there were zero or many.
    pub fn only_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().expect("one request")
    }
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

async fn handle(
    State(backend): State<MockBackend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    backend
        .inner
        .requests
        .lock()
        .expect("requests lock")
        .push(Recorded {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            cookie: header(&headers, "cookie"),
            request_id: header(&headers, "x-request-id"),
        });

    let (status, body) = backend
        .inner
        .response
        .lock()
        .expect("response lock")
        .clone()
        .unwrap_or((200, serde_json::json!({"code": 200, "result": null})));

    (StatusCode::from_u16(status).expect("valid status"), Json(body))
}
