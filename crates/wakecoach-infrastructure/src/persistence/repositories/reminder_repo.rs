use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use wakecoach_domain::reminder::{Reminder, ReminderRepository};
use wakecoach_domain::shared::{DomainError, UserId};

use crate::persistence::SqliteRepositoryBase;

#[derive(FromRow)]
struct ReminderRow {
    user_id: String,
    hour: i64,
    minute: i64,
    enabled: bool,
    created_at: DateTime<Utc>,
}

impl ReminderRow {
    fn into_reminder(self) -> Reminder {
        Reminder::restore(
            UserId::from_string(&self.user_id),
            self.hour as u8,
            self.minute as u8,
            self.enabled,
            self.created_at,
        )
    }
}

pub struct SqliteReminderRepository {
    base: SqliteRepositoryBase,
}

impl SqliteReminderRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl ReminderRepository for SqliteReminderRepository {
    async fn save(&self, reminder: &Reminder) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO reminders (user_id, hour, minute, enabled, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(user_id) DO UPDATE SET
                hour = ?2,
                minute = ?3,
                enabled = ?4
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(reminder.user_id().as_str())
                    .bind(reminder.hour() as i64)
                    .bind(reminder.minute() as i64)
                    .bind(reminder.is_enabled())
                    .bind(reminder.created_at()),
                "Save reminder",
            )
            .await?;

        Ok(())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Reminder>, DomainError> {
        let query = r#"
            SELECT user_id, hour, minute, enabled, created_at
            FROM reminders
            WHERE user_id = ?1
        "#;

        let row: Option<ReminderRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query).bind(user_id.as_str()),
                "Find reminder by user",
            )
            .await?;

        Ok(row.map(ReminderRow::into_reminder))
    }

    async fn find_all_enabled(&self) -> Result<Vec<Reminder>, DomainError> {
        let query = r#"
            SELECT user_id, hour, minute, enabled, created_at
            FROM reminders
            WHERE enabled = 1
            ORDER BY user_id ASC
        "#;

        let rows: Vec<ReminderRow> = self
            .base
            .fetch_all(sqlx::query_as(query), "Find enabled reminders")
            .await?;

        Ok(rows.into_iter().map(ReminderRow::into_reminder).collect())
    }

    async fn delete_by_user(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.base
            .execute(
                sqlx::query("DELETE FROM reminders WHERE user_id = ?1").bind(user_id.as_str()),
                "Delete reminder by user",
            )
            .await?;

        Ok(())
    }
}
