use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use serde_json::Value;

use server::config::Config;

/// Bind a router on an ephemeral port and serve it in the background.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server error");
    });
    addr
}

/// Scripted upstream: answers every completion call with a fixed status
/// and body.
pub async fn spawn_upstream(status: StatusCode, body: &'static str) -> SocketAddr {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(move || async move { (status, body) }),
    );
    spawn(app).await
}

/// What the upstream saw for one completion call.
pub struct RecordedRequest {
    pub headers: HeaderMap,
    pub body: Value,
}

/// Scripted upstream that also records the request it received.
pub async fn spawn_recording_upstream(
    status: StatusCode,
    body: &'static str,
) -> (SocketAddr, Arc<Mutex<Option<RecordedRequest>>>) {
    let slot: Arc<Mutex<Option<RecordedRequest>>> = Arc::new(Mutex::new(None));
    let captured = slot.clone();
    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap, Json(value): Json<Value>| {
            let captured = captured.clone();
            async move {
                *captured.lock().unwrap() = Some(RecordedRequest {
                    headers,
                    body: value,
                });
                (status, body)
            }
        }),
    );
    (spawn(app).await, slot)
}

/// Spawn the relay wired to the given upstream URL.
pub async fn spawn_relay(upstream_url: String) -> SocketAddr {
    let config = Config {
        upstream_url,
        upstream_api_key: "test-key".to_string(),
        upstream_user_id: "test-user".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    spawn(server::app(config)).await
}

pub fn url(addr: SocketAddr, path: &str) -> String {
    format!("http://{addr}{path}")
}
