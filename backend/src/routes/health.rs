//! Health endpoints
//!
//! Three probes in the usual Kubernetes arrangement: `/health` reports
//! the running build, `/health/live` answers whenever the process is up,
//! and `/health/ready` pings the database before declaring the service
//! fit for traffic.

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

/// Body returned by every probe
#[derive(Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<ReadinessChecks>,
}

/// Dependency checks run by the readiness probe
#[derive(Serialize)]
pub struct ReadinessChecks {
    pub database: DependencyStatus,
}

/// Outcome of probing one dependency
#[derive(Serialize)]
pub struct DependencyStatus {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

fn probe_body(status: &'static str) -> HealthResponse {
    HealthResponse {
        service: "jobtrack-backend",
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks: None,
    }
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(probe_body("healthy"))
}

/// GET /health/live - liveness needs nothing beyond a running process
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(probe_body("alive"))
}

/// GET /health/ready - 503 while the database is unreachable
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = match db::health_check(state.db()).await {
        Ok(()) => DependencyStatus {
            healthy: true,
            detail: None,
        },
        Err(e) => DependencyStatus {
            healthy: false,
            detail: Some(e.to_string()),
        },
    };

    let ready = database.healthy;
    let mut body = probe_body(if ready { "ready" } else { "not_ready" });
    body.checks = Some(ReadinessChecks { database });

    if ready {
        Ok(Json(body))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(body)))
    }
}
