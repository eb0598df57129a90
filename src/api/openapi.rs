//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, user_handler};
use crate::domain::{Gender, NewUser, UserPatch, UserResponse};
use crate::types::{PaginatedUsers, PaginationMeta};

/// OpenAPI documentation for the user registry
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Registry",
        version = "0.1.0",
        description = "User profile management API with Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        health_handler::health,
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            Gender,
            NewUser,
            UserPatch,
            UserResponse,
            PaginationMeta,
            PaginatedUsers,
            health_handler::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Users", description = "User profile management")
    )
)]
pub struct ApiDoc;
