//! Health Routes
//!
//! Health check endpoints for monitoring and container probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (archive usable; the page bundle is
//!   reported by `/health` only)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the comic archive can produce a comic for today.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.archive.day_count(state.today()) {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Archive not ready");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// GET /health
///
/// Full health status with component details. A missing page bundle only
/// degrades the service; the JSON API still works without it.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let archive_days = state.archive.day_count(state.today()).unwrap_or(0);
    let static_ok = state.config.static_dir.join("index.html").is_file();

    let status = if archive_days > 0 && static_ok {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        static_dir: if static_ok { "ok" } else { "missing" }.to_string(),
        archive_days,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
