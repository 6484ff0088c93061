use crate::error::McpError;
use crate::mcp::types::McpRequest;
use crate::mcp::{dispatch, iso_timestamp};
use axum::{body::Bytes, response::IntoResponse, Json};
use serde_json::json;
use tracing::{error, info};

/// `GET /api/health` — liveness probe, not wrapped in the MCP envelope.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": iso_timestamp(),
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `POST /api/mcp-handler` — the single dispatch endpoint.
///
/// Every well-formed request answers 200, including the expected failure
/// cases (unknown method, unknown tool). The body is read as raw bytes so
/// a malformed body lands in the internal-error tier: 500 with the same
/// `{success: false, error}` envelope.
pub async fn mcp_handler(body: Bytes) -> Result<impl IntoResponse, McpError> {
    let request: McpRequest = serde_json::from_slice(&body).map_err(|e| {
        error!("Error processing MCP request: {}", e);
        McpError::from(e)
    })?;

    info!("MCP handler processed a request: {}", request.method);
    Ok(Json(dispatch(&request.method, request.params.as_ref())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::Value;

    async fn response_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "botworks-mcp");
        assert!(json["version"].is_string());
        assert!(
            chrono::DateTime::parse_from_rfc3339(json["timestamp"].as_str().unwrap()).is_ok()
        );
    }

    #[tokio::test]
    async fn test_mcp_handler_dispatches() {
        let body = Bytes::from(r#"{"method": "ping"}"#);
        let response = mcp_handler(body).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["message"], "pong");
    }

    #[tokio::test]
    async fn test_mcp_handler_unknown_method_is_200() {
        let body = Bytes::from(r#"{"method": "selfDestruct"}"#);
        let response = mcp_handler(body).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("selfDestruct"));
    }

    #[tokio::test]
    async fn test_mcp_handler_malformed_body_is_500() {
        let body = Bytes::from("not json at all");
        let response = mcp_handler(body).await.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = response_json(response).await;
        assert_eq!(json["success"], false);
        assert!(!json["error"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mcp_handler_missing_method_is_500() {
        let body = Bytes::from(r#"{"params": {}}"#);
        let response = mcp_handler(body).await.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
