//! Health check endpoint

use crate::state::AppState;
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Configured report source
    pub source: String,
    /// Reports held in the cache
    pub cached_reports: usize,
    /// System uptime in seconds
    pub uptime_seconds: u64,
}

/// Liveness check for load balancers and monitoring
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        source: state.source_name().to_string(),
        cached_reports: state.cached_reports(),
        uptime_seconds: get_uptime_seconds(),
    };

    debug!(uptime = response.uptime_seconds, "Health check");
    Json(response)
}

fn get_uptime_seconds() -> u64 {
    static START_TIME: std::sync::LazyLock<std::time::Instant> =
        std::sync::LazyLock::new(std::time::Instant::now);
    START_TIME.elapsed().as_secs()
}
