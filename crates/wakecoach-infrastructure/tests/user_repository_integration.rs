use std::sync::Arc;

use wakecoach_domain::shared::DomainError;
use wakecoach_domain::user::{Email, User, UserRepository};
use wakecoach_infrastructure::persistence::repositories::SqliteUserRepository;
use wakecoach_infrastructure::security::hash_password;


#[tokio::test]
async fn user_repo_save_and_find_integration() {
    let (_dir, pool) = test_helpers::setup_test_db().await;
    let repo = SqliteUserRepository::new(Arc::new(pool.clone()));

    let email = Email::new("Morning.Person@Example.com").unwrap();
    let user = User::register(email.clone(), hash_password("hunter2").unwrap()).unwrap();

    repo.save(&user).await.expect("save user");

    let by_id = repo
        .find_by_id(user.id())
        .await
        .expect("find by id")
        .expect("should exist");
    assert_eq!(by_id.email().as_str(), "morning.person@example.com");

    let by_email = repo
        .find_by_email(&email)
        .await
        .expect("find by email")
        .expect("should exist");
    assert_eq!(by_email.id().as_str(), user.id().as_str());
}

#[tokio::test]
async fn user_repo_rejects_duplicate_email_integration() {
    let (_dir, pool) = test_helpers::setup_test_db().await;
    let repo = SqliteUserRepository::new(Arc::new(pool.clone()));

    let email = Email::new("taken@example.com").unwrap();
    let first = User::register(email.clone(), "hash-a".to_string()).unwrap();
    let second = User::register(email, "hash-b".to_string()).unwrap();

    repo.save(&first).await.expect("save first user");

    match repo.save(&second).await {
        Err(DomainError::EmailTaken(email)) => assert_eq!(email, "taken@example.com"),
        other => panic!("Expected EmailTaken, got {other:?}"),
    }
}

#[tokio::test]
async fn user_repo_missing_user_is_none_integration() {
    let (_dir, pool) = test_helpers::setup_test_db().await;
    let repo = SqliteUserRepository::new(Arc::new(pool.clone()));

    let email = Email::new("nobody@example.com").unwrap();
    assert!(repo.find_by_email(&email).await.expect("find").is_none());
}
