//! User repository tests against an in-memory SQLite database.

mod support;

use domain::NewUser;
use user_service_lib::repository::{UserRepository, UserStore};

use support::{seed_users, test_database};

#[tokio::test]
async fn test_create_assigns_distinct_ids() {
    let db = test_database().await;
    let users = seed_users(&db).await;

    assert_eq!(users.len(), 3);
    assert!(users[0].id < users[1].id);
    assert!(users[1].id < users[2].id);
    assert_eq!(users[1].name, "Isaac");
    assert_eq!(users[1].age, 21);
}

#[tokio::test]
async fn test_find_by_email() {
    let db = test_database().await;
    let seeded = seed_users(&db).await;
    let repo = UserStore::new(db.get_connection());

    let user = repo.find_by_email("isaac@gmail.com").await.unwrap();

    assert_eq!(user, Some(seeded[1].clone()));
}

#[tokio::test]
async fn test_find_by_email_missing() {
    let db = test_database().await;
    seed_users(&db).await;
    let repo = UserStore::new(db.get_connection());

    let user = repo.find_by_email("jose@gmail.com").await.unwrap();

    assert!(user.is_none());
}

#[tokio::test]
async fn test_find_by_email_with_duplicates_returns_one_of_them() {
    let db = test_database().await;
    let repo = UserStore::new(db.get_connection());
    let first = repo
        .create(NewUser::new("Ana", "shared@gmail.com", 30))
        .await
        .unwrap();
    let second = repo
        .create(NewUser::new("Eva", "shared@gmail.com", 31))
        .await
        .unwrap();

    let user = repo.find_by_email("shared@gmail.com").await.unwrap().unwrap();

    assert!(user == first || user == second);
}

#[tokio::test]
async fn test_find_all_by_name() {
    let db = test_database().await;
    seed_users(&db).await;
    let repo = UserStore::new(db.get_connection());

    let users = repo.find_all_by_name("Anyelo").await.unwrap();

    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.name == "Anyelo"));
}

#[tokio::test]
async fn test_find_all_by_name_is_exact() {
    let db = test_database().await;
    seed_users(&db).await;
    let repo = UserStore::new(db.get_connection());

    assert!(repo.find_all_by_name("Any").await.unwrap().is_empty());
    assert!(repo.find_all_by_name("Jose").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_all_by_age_between_inclusive() {
    let db = test_database().await;
    let seeded = seed_users(&db).await;
    let repo = UserStore::new(db.get_connection());

    let users = repo.find_all_by_age_between(19, 21).await.unwrap();

    assert_eq!(users, seeded);
    assert!(users.iter().all(|u| u.is_aged_between(19, 21)));
}

#[tokio::test]
async fn test_find_all_by_age_between_single_age() {
    let db = test_database().await;
    let seeded = seed_users(&db).await;
    let repo = UserStore::new(db.get_connection());

    let users = repo.find_all_by_age_between(20, 20).await.unwrap();

    assert_eq!(users, vec![seeded[0].clone()]);
}

#[tokio::test]
async fn test_find_all_by_age_between_no_match() {
    let db = test_database().await;
    seed_users(&db).await;
    let repo = UserStore::new(db.get_connection());

    let users = repo.find_all_by_age_between(23, 27).await.unwrap();

    assert!(users.is_empty());
}

#[tokio::test]
async fn test_find_all_by_age_between_inverted_bounds() {
    let db = test_database().await;
    seed_users(&db).await;
    let repo = UserStore::new(db.get_connection());

    let users = repo.find_all_by_age_between(21, 19).await.unwrap();

    assert!(users.is_empty());
}

#[tokio::test]
async fn test_migration_status_reports_applied() {
    let db = test_database().await;

    let status = db.migration_status().await.unwrap();

    assert_eq!(status.len(), 1);
    assert_eq!(status[0].0, "m20240101_000001_create_users_table");
    assert!(status[0].1);
}
