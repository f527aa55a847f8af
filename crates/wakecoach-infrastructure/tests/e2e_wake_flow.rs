//! End-to-end wake flow against a real database: register a user, seed three
//! mornings of history, log a fresh wake-up through the repository, and run
//! the streak queries the way the application layer does.

use std::sync::Arc;

use chrono::{Duration, Local, Timelike, Utc};

use wakecoach_domain::reminder::{Reminder, ReminderRepository};
use wakecoach_domain::user::{Email, User, UserRepository};
use wakecoach_domain::wake_log::{CutoffHour, StreakEngine, WakeLogRepository};
use wakecoach_infrastructure::persistence::repositories::{
    SqliteReminderRepository, SqliteUserRepository, SqliteWakeLogRepository,
};
use wakecoach_infrastructure::security::hash_password;


#[tokio::test]
async fn e2e_wake_flow_streak_over_persisted_logs() {
    let (_dir, pool) = test_helpers::setup_test_db().await;
    let pool = Arc::new(pool);

    let user_repo = SqliteUserRepository::new(pool.clone());
    let wake_log_repo = SqliteWakeLogRepository::new(pool.clone());

    let user = User::register(
        Email::new("streaker@example.com").unwrap(),
        hash_password("hunter2").unwrap(),
    )
    .unwrap();
    user_repo.save(&user).await.expect("save user");

    // 06:00 local on today and the two previous days.
    let now = Local::now();
    for days_ago in [0i64, 1, 2] {
        let local = (now - Duration::days(days_ago))
            .with_hour(6)
            .and_then(|dt| dt.with_minute(0))
            .unwrap();
        sqlx::query("INSERT INTO wake_logs (id, user_id, created_at) VALUES (?1, ?2, ?3)")
            .bind(format!("seed-{days_ago}"))
            .bind(user.id().as_str())
            .bind(local.with_timezone(&Utc).to_rfc3339())
            .execute(&*pool)
            .await
            .expect("seed wake log");
    }

    // A fresh insert lands on today as well; duplicates count once and an
    // after-cutoff insert is simply ignored, so the streak stays 3 whatever
    // wall-clock hour the test runs at.
    wake_log_repo.insert(user.id()).await.expect("log today");

    let logs = wake_log_repo
        .find_by_user(user.id())
        .await
        .expect("fetch logs");
    assert_eq!(logs.len(), 4);

    let cutoff = CutoffHour::default();
    let tz = now.timezone();
    let reference = now.date_naive();

    assert!(StreakEngine::is_valid_today(&logs, &now, cutoff));
    assert_eq!(
        StreakEngine::current_streak(&logs, reference, cutoff, &tz),
        3
    );

    let last = StreakEngine::last_valid_wake(&logs, cutoff, &tz).expect("has a valid wake");
    assert_eq!(last.with_timezone(&tz).date_naive(), reference);
}

#[tokio::test]
async fn e2e_reminder_round_trip() {
    let (_dir, pool) = test_helpers::setup_test_db().await;
    let pool = Arc::new(pool);

    let user_repo = SqliteUserRepository::new(pool.clone());
    let reminder_repo = SqliteReminderRepository::new(pool.clone());

    let user = User::register(
        Email::new("sleepy@example.com").unwrap(),
        hash_password("hunter2").unwrap(),
    )
    .unwrap();
    user_repo.save(&user).await.expect("save user");

    let reminder = Reminder::with_default_time(user.id().clone());
    reminder_repo.save(&reminder).await.expect("save reminder");

    let stored = reminder_repo
        .find_by_user(user.id())
        .await
        .expect("find reminder")
        .expect("should exist");
    assert_eq!((stored.hour(), stored.minute()), (6, 30));

    // Rescheduling replaces, not duplicates.
    let mut updated = stored;
    updated.reschedule(7, 0).unwrap();
    reminder_repo.save(&updated).await.expect("save updated");

    let enabled = reminder_repo.find_all_enabled().await.expect("enabled");
    assert_eq!(enabled.len(), 1);
    assert_eq!((enabled[0].hour(), enabled[0].minute()), (7, 0));

    // Cancelled reminders drop out of the scheduler sync set.
    let mut disabled = enabled.into_iter().next().unwrap();
    disabled.disable();
    reminder_repo.save(&disabled).await.expect("save disabled");
    assert!(reminder_repo.find_all_enabled().await.unwrap().is_empty());
}
