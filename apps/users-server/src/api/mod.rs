//! API endpoints.

pub mod health;
pub mod users;

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
        .route("/health", get(health::health_check))
        // User endpoints
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/search/by-email", get(users::search_by_email))
}

/// Welcome endpoint.
async fn welcome(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "message": format!("Welcome to {}", state.config.app_name),
        "version": state.config.app_version,
        "docs": state.config.docs_path,
    }))
}
