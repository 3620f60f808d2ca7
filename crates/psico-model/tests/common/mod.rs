//! A canned HTTP provider served in-process on a random port.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode, Uri};

/// One request as the stub received it.
#[derive(Debug, Clone)]
pub struct Seen {
    pub path: String,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    headers: HeaderMap,
    body: &'static str,
    seen: Arc<Mutex<Vec<Seen>>>,
}

async fn reply(
    State(stub): State<Stub>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, HeaderMap, &'static str) {
    stub.seen.lock().unwrap().push(Seen {
        path: uri.path().to_string(),
        headers,
        body: serde_json::from_str(&body).unwrap_or(serde_json::Value::Null),
    });
    (stub.status, stub.headers.clone(), stub.body)
}

/// Serve `body` with `status` for every request. Returns the base URL and
/// the log of received requests.
pub async fn spawn_stub(
    status: StatusCode,
    headers: &[(&'static str, &'static str)],
    body: &'static str,
) -> (String, Arc<Mutex<Vec<Seen>>>) {
    let mut header_map = HeaderMap::new();
    header_map.insert(
        HeaderName::from_static("content-type"),
        HeaderValue::from_static("application/json"),
    );
    for (name, value) in headers {
        header_map.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }

    let seen = Arc::new(Mutex::new(Vec::new()));
    let stub = Stub {
        status,
        headers: header_map,
        body,
        seen: seen.clone(),
    };
    let app = Router::new().fallback(reply).with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), seen)
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
