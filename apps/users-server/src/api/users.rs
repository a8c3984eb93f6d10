//! User API endpoints.
//!
//! Handlers stay thin: validation, uniqueness, and storage live in
//! [`user_directory`]; this module maps HTTP to directory calls.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use entities::UserProfile;
use serde::Deserialize;
use user_directory::{NewUser, UserPatch};

use crate::error::ServerResult;
use crate::state::SharedState;

/// Query parameters for the email search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchByEmailQuery {
    /// Email address to look up (exact match).
    pub email: String,
}

/// Creates a new user.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created", body = UserProfile),
        (status = 400, description = "Email already registered"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_user(
    State(state): State<SharedState>,
    Json(request): Json<NewUser>,
) -> ServerResult<(StatusCode, Json<UserProfile>)> {
    let mut directory = state.directory.write().await;
    let profile = directory.create(request)?;

    Ok((StatusCode::CREATED, Json(profile)))
}

/// Lists all users.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All stored users", body = [UserProfile])
    )
)]
pub async fn list_users(State(state): State<SharedState>) -> Json<Vec<UserProfile>> {
    let directory = state.directory.read().await;
    Json(directory.list())
}

/// Gets a user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user", body = UserProfile),
        (status = 404, description = "Unknown user id")
    )
)]
pub async fn get_user(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> ServerResult<Json<UserProfile>> {
    let directory = state.directory.read().await;
    let profile = directory.get(id)?;

    Ok(Json(profile))
}

/// Applies a partial update to a user. Absent fields are left unchanged.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "User identifier")),
    request_body = UserPatch,
    responses(
        (status = 200, description = "Updated user", body = UserProfile),
        (status = 400, description = "Email already registered"),
        (status = 404, description = "Unknown user id"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn update_user(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    Json(request): Json<UserPatch>,
) -> ServerResult<Json<UserProfile>> {
    let mut directory = state.directory.write().await;
    let profile = directory.update(id, request)?;

    Ok(Json(profile))
}

/// Deletes a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "Unknown user id")
    )
)]
pub async fn delete_user(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> ServerResult<StatusCode> {
    let mut directory = state.directory.write().await;
    directory.remove(id)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Finds a user by exact email match.
#[utoipa::path(
    get,
    path = "/users/search/by-email",
    tag = "users",
    params(("email" = String, Query, description = "Email address to look up")),
    responses(
        (status = 200, description = "The matching user", body = UserProfile),
        (status = 404, description = "No user with that email")
    )
)]
pub async fn search_by_email(
    State(state): State<SharedState>,
    Query(query): Query<SearchByEmailQuery>,
) -> ServerResult<Json<UserProfile>> {
    let directory = state.directory.read().await;
    let profile = directory.find_by_email(&query.email)?;

    Ok(Json(profile))
}
