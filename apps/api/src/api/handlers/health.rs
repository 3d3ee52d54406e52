use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::state::AppState;

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
    pub database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}

/// API banner
///
/// GET /api
pub async fn api_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Squad Shuffle API is running!"
    }))
}

/// Health check including the player store
///
/// GET /api/health
pub async fn store_health(State(state): State<AppState>) -> Json<ServiceStatus> {
    match state.players.ping().await {
        Ok(()) => Json(ServiceStatus {
            status: "healthy",
            database: "connected",
            error: None,
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Player store unreachable");
            Json(ServiceStatus {
                status: "unhealthy",
                database: "disconnected",
                error: Some(e.to_string()),
            })
        }
    }
}
