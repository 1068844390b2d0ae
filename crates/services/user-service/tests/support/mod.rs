//! Shared fixtures for integration tests.

#![allow(dead_code)]

use common::DatabaseConfig;
use domain::{NewUser, User};
use user_service_lib::infra::Database;
use user_service_lib::repository::{UserRepository, UserStore};

/// Connect to a fresh in-memory SQLite database with migrations applied.
///
/// The pool is pinned to a single connection since every SQLite
/// in-memory connection opens its own empty database.
pub async fn test_database() -> Database {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };

    Database::connect(&config)
        .await
        .expect("in-memory database should start")
}

/// Store the three reference users and return them with assigned ids.
pub async fn seed_users(db: &Database) -> Vec<User> {
    let repo = UserStore::new(db.get_connection());
    let mut users = Vec::new();

    for new_user in [
        NewUser::new("Anyelo", "anyelo@gmail.com", 20),
        NewUser::new("Isaac", "isaac@gmail.com", 21),
        NewUser::new("Anyelo", "pego@gmail.com", 19),
    ] {
        users.push(repo.create(new_user).await.expect("seed insert should succeed"));
    }

    users
}
