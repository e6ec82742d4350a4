//! Health check endpoint

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::server::AppState;

pub const SERVICE_NAME: &str = "hookcord";

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub uptime_secs: u64,
}

pub(crate) async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthStatus>) {
    (
        StatusCode::OK,
        Json(HealthStatus {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            uptime_secs: state.started_at.elapsed().as_secs(),
        }),
    )
}
