//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{NewUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// List queries return rows ordered by id. Single-row lookups apply no
/// ordering, so which row wins among duplicate emails is unspecified.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by exact email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find all users with exactly this name
    async fn find_all_by_name(&self, name: &str) -> AppResult<Vec<User>>;

    /// Find all users with `min_age <= age <= max_age`
    async fn find_all_by_age_between(&self, min_age: i32, max_age: i32) -> AppResult<Vec<User>>;

    /// Insert a new user; the store assigns the id
    async fn create(&self, new_user: NewUser) -> AppResult<User>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_all_by_name(&self, name: &str) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(user::Column::Name.eq(name))
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_all_by_age_between(&self, min_age: i32, max_age: i32) -> AppResult<Vec<User>> {
        // BETWEEN with inverted bounds matches nothing
        let models = UserEntity::find()
            .filter(user::Column::Age.between(min_age, max_age))
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(new_user.name),
            email: Set(new_user.email),
            age: Set(new_user.age),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }
}
