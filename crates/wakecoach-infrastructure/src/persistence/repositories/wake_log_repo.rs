use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::warn;
use sqlx::{FromRow, SqlitePool};

use wakecoach_domain::shared::{DomainError, UserId, WakeLogId};
use wakecoach_domain::wake_log::{WakeLogEntry, WakeLogRepository};

use crate::persistence::SqliteRepositoryBase;

#[derive(FromRow)]
struct WakeLogRow {
    id: String,
    user_id: String,
    created_at: String,
}

impl WakeLogRow {
    /// Rows with an unparseable timestamp are skipped by the caller rather
    /// than aborting the whole scan; a bad row must not hide the rest of the
    /// user's history.
    fn try_into_entry(self) -> Result<WakeLogEntry, String> {
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| format!("{} ({e})", self.created_at))?;

        Ok(WakeLogEntry::restore(
            WakeLogId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            created_at,
        ))
    }
}

pub struct SqliteWakeLogRepository {
    base: SqliteRepositoryBase,
}

impl SqliteWakeLogRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl WakeLogRepository for SqliteWakeLogRepository {
    async fn insert(&self, user_id: &UserId) -> Result<WakeLogEntry, DomainError> {
        // The store assigns the timestamp: stamped here, at insert time.
        let entry = WakeLogEntry::record(user_id.clone());

        let query = r#"
            INSERT INTO wake_logs (id, user_id, created_at)
            VALUES (?1, ?2, ?3)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(entry.id().as_str())
                    .bind(entry.user_id().as_str())
                    .bind(entry.created_at().to_rfc3339()),
                "Insert wake log",
            )
            .await?;

        Ok(entry)
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<WakeLogEntry>, DomainError> {
        let query = r#"
            SELECT id, user_id, created_at
            FROM wake_logs
            WHERE user_id = ?1
            ORDER BY created_at DESC
        "#;

        let rows: Vec<WakeLogRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query).bind(user_id.as_str()),
                "Find wake logs by user",
            )
            .await?;

        let entries = rows
            .into_iter()
            .filter_map(|row| match row.try_into_entry() {
                Ok(entry) => Some(entry),
                Err(detail) => {
                    warn!(
                        "[wake-log] skip row with invalid created_at for user {}: {}",
                        user_id, detail
                    );
                    None
                }
            })
            .collect();

        Ok(entries)
    }
}
