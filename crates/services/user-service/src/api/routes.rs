//! Route configuration.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use domain::USERS_BASE_PATH;

use super::handlers::{health_routes, user_routes};
use super::openapi::ApiDoc;
use super::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // User lookups
        .nest(USERS_BASE_PATH, user_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
