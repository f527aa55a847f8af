use std::sync::Arc;

use chrono::{Duration, Utc};

use wakecoach_domain::session::{Session, SessionRepository};
use wakecoach_domain::shared::UserId;
use wakecoach_infrastructure::persistence::repositories::SqliteSessionRepository;
use wakecoach_infrastructure::security::{digest_token, generate_token};


#[tokio::test]
async fn session_repo_save_find_and_delete_integration() {
    let (_dir, pool) = test_helpers::setup_test_db().await;
    let user_id = UserId::new();
    test_helpers::insert_test_user(&pool, user_id.as_str(), "login@example.com").await;

    let repo = SqliteSessionRepository::new(Arc::new(pool.clone()));

    let digest = digest_token(&generate_token());
    let expires_at = Utc::now() + Duration::days(Session::DEFAULT_EXPIRATION_DAYS);
    let session = Session::new(user_id.clone(), digest.clone(), expires_at).expect("create session");

    repo.save(&session).await.expect("save session");

    let fetched = repo
        .find_by_digest(&digest)
        .await
        .expect("find")
        .expect("should exist");
    assert_eq!(fetched.user_id().as_str(), user_id.as_str());
    assert!(fetched.is_valid());

    repo.delete_by_digest(&digest).await.expect("delete");
    assert!(repo.find_by_digest(&digest).await.expect("find").is_none());
}

#[tokio::test]
async fn session_repo_replaces_previous_login_integration() {
    let (_dir, pool) = test_helpers::setup_test_db().await;
    let user_id = UserId::new();
    test_helpers::insert_test_user(&pool, user_id.as_str(), "relogin@example.com").await;

    let repo = SqliteSessionRepository::new(Arc::new(pool.clone()));
    let expires_at = Utc::now() + Duration::days(Session::DEFAULT_EXPIRATION_DAYS);

    let first_digest = digest_token(&generate_token());
    let first = Session::new(user_id.clone(), first_digest.clone(), expires_at).unwrap();
    repo.save(&first).await.expect("save first session");

    let second_digest = digest_token(&generate_token());
    let second = Session::new(user_id.clone(), second_digest.clone(), expires_at).unwrap();
    repo.save(&second).await.expect("save second session");

    // One session per user: the first token no longer resolves.
    assert!(repo.find_by_digest(&first_digest).await.unwrap().is_none());
    assert!(repo.find_by_digest(&second_digest).await.unwrap().is_some());
}

#[tokio::test]
async fn session_repo_delete_by_user_integration() {
    let (_dir, pool) = test_helpers::setup_test_db().await;
    let user_id = UserId::new();
    test_helpers::insert_test_user(&pool, user_id.as_str(), "signout@example.com").await;

    let repo = SqliteSessionRepository::new(Arc::new(pool.clone()));
    let digest = digest_token(&generate_token());
    let session = Session::new(
        user_id.clone(),
        digest.clone(),
        Utc::now() + Duration::days(1),
    )
    .unwrap();
    repo.save(&session).await.expect("save session");

    repo.delete_by_user(&user_id).await.expect("delete by user");
    assert!(repo.find_by_digest(&digest).await.unwrap().is_none());
}
