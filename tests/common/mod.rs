use axum::{response::Response, Router};
use botworks_mcp::api;
use serde_json::Value;

/// The full application router, identical to what `serve` runs.
pub fn build_test_app() -> Router {
    api::build_router()
}

pub async fn response_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Serve the full app on an ephemeral loopback port in the background.
/// Returns the base URL including the `/api` prefix, ready for `McpClient`.
pub async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, build_test_app()).await.unwrap();
    });

    format!("http://{}/api", addr)
}
