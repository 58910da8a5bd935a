//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 with `{"status":"healthy"}` whenever
//! the process can answer HTTP. There are no dependencies to probe, so the
//! answer never varies.

use axum::Json;
use serde::Serialize;

pub const HEALTHY: &str = "healthy";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Health check handler.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: HEALTHY })
}
