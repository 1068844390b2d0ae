//! User lookup handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::User;

use crate::api::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/email/:email", get(find_by_email))
        .route("/name/:name", get(find_all_by_name))
        .route("/age/:min_age/:max_age", get(find_all_by_age_between))
}

/// Get a single user by email
#[utoipa::path(
    get,
    path = "/api/users/email/{email}",
    tag = "Users",
    params(
        ("email" = String, Path, description = "Email address to look up")
    ),
    responses(
        (status = 200, description = "Matching user", body = User),
        (status = 404, description = "User not found", body = String, content_type = "text/plain")
    )
)]
pub async fn find_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user_by_email(&email).await?;
    Ok(Json(user))
}

/// List users with an exact name
#[utoipa::path(
    get,
    path = "/api/users/name/{name}",
    tag = "Users",
    params(
        ("name" = String, Path, description = "Name to match exactly")
    ),
    responses(
        (status = 200, description = "Matching users, possibly empty", body = Vec<User>)
    )
)]
pub async fn find_all_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.get_all_users_by_name(&name).await?;
    Ok(Json(users))
}

/// List users whose age lies in an inclusive range
#[utoipa::path(
    get,
    path = "/api/users/age/{min_age}/{max_age}",
    tag = "Users",
    params(
        ("min_age" = i32, Path, description = "Lower age bound (inclusive)"),
        ("max_age" = i32, Path, description = "Upper age bound (inclusive)")
    ),
    responses(
        (status = 200, description = "Matching users, possibly empty", body = Vec<User>),
        (status = 400, description = "Age bounds are not integers")
    )
)]
pub async fn find_all_by_age_between(
    State(state): State<AppState>,
    Path((min_age, max_age)): Path<(i32, i32)>,
) -> AppResult<Json<Vec<User>>> {
    let users = state
        .user_service
        .get_all_users_by_age_between(min_age, max_age)
        .await?;
    Ok(Json(users))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use common::{AppError, DatabaseConfig};
    use domain::NewUser;
    use mockall::predicate::eq;
    use sea_orm::DbErr;
    use tower::ServiceExt;

    use crate::api::create_router;
    use crate::infra::Database;
    use crate::service::MockUserService;

    use super::*;

    async fn app_with(service: MockUserService) -> Router {
        let db = Database::connect_without_migrations(&DatabaseConfig::with_url("sqlite::memory:"))
            .await
            .unwrap();
        create_router(AppState::new(Arc::new(service), db))
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_email_is_forwarded_to_service() {
        let mut service = MockUserService::new();
        service
            .expect_get_user_by_email()
            .withf(|email| email == "isaac@gmail.com")
            .times(1)
            .returning(|_| Ok(NewUser::new("Isaac", "isaac@gmail.com", 21).into_user(2)));

        let response = get(app_with(service).await, "/api/users/email/isaac@gmail.com").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let user: User = serde_json::from_slice(&body).unwrap();
        assert_eq!(user.id, 2);
        assert_eq!(user.name, "Isaac");
    }

    #[tokio::test]
    async fn test_age_bounds_are_forwarded_in_order() {
        let mut service = MockUserService::new();
        service
            .expect_get_all_users_by_age_between()
            .with(eq(30), eq(18))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let response = get(app_with(service).await, "/api/users/age/30/18").await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_store_failure_is_opaque_server_error() {
        let mut service = MockUserService::new();
        service
            .expect_get_all_users_by_name()
            .returning(|_| Err(AppError::Database(DbErr::Custom("disk I/O error".to_string()))));

        let response = get(app_with(service).await, "/api/users/name/Anyelo").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "DATABASE_ERROR");
        assert_eq!(json["error"]["message"], "A database error occurred");
    }
}
