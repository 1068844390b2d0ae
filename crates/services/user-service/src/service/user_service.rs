//! User service - Handles user lookup logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::User;

use crate::repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
///
/// Only the single-user lookup can fail with not-found; list lookups
/// return an empty vector when nothing matches.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by email, failing with "User not found" when absent
    async fn get_user_by_email(&self, email: &str) -> AppResult<User>;

    /// Get all users with the given name
    async fn get_all_users_by_name(&self, name: &str) -> AppResult<Vec<User>>;

    /// Get all users whose age lies in the inclusive range
    async fn get_all_users_by_age_between(&self, min_age: i32, max_age: i32)
        -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        let user = self.repo.find_by_email(email).await?;
        if user.is_none() {
            tracing::debug!("No user matched email lookup");
        }
        user.ok_or_user_not_found()
    }

    async fn get_all_users_by_name(&self, name: &str) -> AppResult<Vec<User>> {
        self.repo.find_all_by_name(name).await
    }

    async fn get_all_users_by_age_between(
        &self,
        min_age: i32,
        max_age: i32,
    ) -> AppResult<Vec<User>> {
        self.repo.find_all_by_age_between(min_age, max_age).await
    }
}
