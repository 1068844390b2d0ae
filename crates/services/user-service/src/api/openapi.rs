//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::api::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};
use domain::User;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::user_handler::find_by_email,
        crate::api::handlers::user_handler::find_all_by_name,
        crate::api::handlers::user_handler::find_all_by_age_between,
        crate::api::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            User,
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
        )
    ),
    tags(
        (name = "Users", description = "User lookup endpoints"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
