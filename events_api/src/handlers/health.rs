use axum::response::IntoResponse;
use serde_json::json;
use tracing::instrument;

pub const SERVICE_NAME: &str = "Time Space API";

#[instrument]
pub async fn health() -> impl IntoResponse {
    tracing::info!("health check");

    axum::Json(json!({ "status": "healthy", "service": SERVICE_NAME }))
}

pub async fn root() -> impl IntoResponse {
    axum::Json(json!({
        "message": "Time Space API - Interactive History Map",
        "description": "Discover pivotal events through time",
        "version": env!("CARGO_PKG_VERSION"),
        "health": "/health",
    }))
}
