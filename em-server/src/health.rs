use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde_json::json;

/// GET /health - Health check with component status
pub async fn health() -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "auth": "operational",
            "store": "operational",
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Kubernetes liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    // Simple check: if we can respond, we're alive
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Kubernetes readiness probe (ready to accept traffic?)
pub async fn readiness() -> Response {
    // The store is in-memory; if the server is running, it's ready
    (StatusCode::OK, "Ready").into_response()
}
