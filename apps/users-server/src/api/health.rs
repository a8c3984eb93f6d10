//! Health check endpoint.

use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::SharedState;

/// Health check response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Service name.
    pub service: String,
    /// Number of users currently stored.
    pub total_users: usize,
}

/// Reports service health and the current user count.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<SharedState>) -> Json<HealthResponse> {
    let directory = state.directory.read().await;

    Json(HealthResponse {
        status: "ok",
        service: state.config.app_name.clone(),
        total_users: directory.count(),
    })
}
