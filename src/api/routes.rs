use axum::{
    Router,
    routing::{get, post},
};

/// The two endpoints the original backend exposed, mounted under `/api`.
pub fn api_routes() -> Router {
    Router::new()
        .route("/health", get(super::handlers::health_check))
        .route("/mcp-handler", post(super::handlers::mcp_handler))
}
