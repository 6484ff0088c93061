use crate::mcp::types::McpResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum McpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {endpoint} failed with status {status}")]
    UnexpectedStatus {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, McpError>;

impl McpError {
    /// Convert error to HTTP status code
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            McpError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            McpError::Http(_) => StatusCode::BAD_GATEWAY,
            McpError::UnexpectedStatus { .. } => StatusCode::BAD_GATEWAY,
            // A body that cannot be parsed is the internal-error tier,
            // mirrored as 500 rather than a 4xx extractor rejection.
            McpError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            McpError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            McpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for McpError {
    fn from(err: anyhow::Error) -> Self {
        McpError::Internal(err.to_string())
    }
}

impl axum::response::IntoResponse for McpError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = McpResponse::<serde_json::Value>::failure(self.to_string());

        (status, axum::Json(body)).into_response()
    }
}
