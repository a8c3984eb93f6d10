//! OpenAPI documentation for the users API.

use entities::UserProfile;
use user_directory::{NewUser, UserPatch};
use utoipa::OpenApi;

use crate::api::health::HealthResponse;

/// OpenAPI document for the users API. The title and version are replaced
/// from configuration when the router is built.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "A simple user CRUD API with validation and interactive docs"
    ),
    paths(
        crate::api::health::health_check,
        crate::api::users::create_user,
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,
        crate::api::users::search_by_email,
    ),
    components(schemas(UserProfile, NewUser, UserPatch, HealthResponse)),
    tags(
        (name = "users", description = "Operations on stored users"),
        (name = "health", description = "Service health checks")
    )
)]
pub struct ApiDoc;
