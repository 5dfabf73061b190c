use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use std::time::SystemTime;
use tracing::info;

use crate::services::gemini::MODEL;
use crate::state::AppState;

/// Health check endpoint
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    info!("Health check requested");

    let timestamp = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let metrics = state.limiter.metrics();

    let response = json!({
        "status": "healthy",
        "timestamp": timestamp,
        "version": env!("CARGO_PKG_VERSION"),
        "model": MODEL,
        "rate_limiting": {
            "total_requests": metrics.total_requests,
            "rejected_requests": metrics.rejected_requests,
            "available_permits": metrics.available_permits,
            "rejection_rate": if metrics.total_requests > 0 {
                (metrics.rejected_requests as f64 / metrics.total_requests as f64 * 100.0).round() / 100.0
            } else {
                0.0
            }
        }
    });

    Json(response)
}

/// Readiness check endpoint (for Kubernetes/Railway)
pub async fn ready_handler(State(state): State<AppState>) -> Result<StatusCode, StatusCode> {
    if state.config.gemini_api_key.trim().is_empty() {
        info!("Readiness check failed - generation client not configured");
        Err(StatusCode::SERVICE_UNAVAILABLE)
    } else {
        info!("Readiness check passed");
        Ok(StatusCode::OK)
    }
}
