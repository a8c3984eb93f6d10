//! API endpoints.

pub mod notes;

use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use serde_json::{Value, json};

use crate::state::SharedState;

/// Creates the API router with all endpoints.
pub fn create_router() -> Router<SharedState> {
    Router::new()
        // Service endpoints
        .route("/", get(welcome))
        .route("/health", get(health_check))
        // Note endpoints
        .route("/notes", get(notes::list_notes).post(notes::create_note))
        .route("/notes/:id", get(notes::get_note))
}

/// Welcome endpoint.
async fn welcome(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "message": format!("Welcome to {}", state.config.app_name),
        "version": state.config.app_version,
        "docs": state.config.docs_path,
    }))
}

/// Health check endpoint.
async fn health_check(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": state.config.app_name,
    }))
}
