use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use wakecoach_domain::session::{Session, SessionRepository};
use wakecoach_domain::shared::{DomainError, UserId};

use crate::persistence::SqliteRepositoryBase;

#[derive(FromRow)]
struct SessionRow {
    user_id: String,
    token_digest: String,
    expires_at: DateTime<Utc>,
    last_login_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session::restore(
            UserId::from_string(&self.user_id),
            self.token_digest,
            self.expires_at,
            self.last_login_at,
        )
    }
}

pub struct SqliteSessionRepository {
    base: SqliteRepositoryBase,
}

impl SqliteSessionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO sessions (user_id, token_digest, expires_at, last_login_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(user_id) DO UPDATE SET
                token_digest = ?2,
                expires_at = ?3,
                last_login_at = ?4
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(session.user_id().as_str())
                    .bind(session.token_digest())
                    .bind(session.expires_at())
                    .bind(session.last_login_at()),
                "Save session",
            )
            .await?;

        Ok(())
    }

    async fn find_by_digest(&self, token_digest: &str) -> Result<Option<Session>, DomainError> {
        let query = r#"
            SELECT user_id, token_digest, expires_at, last_login_at
            FROM sessions
            WHERE token_digest = ?1
        "#;

        let row: Option<SessionRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query).bind(token_digest),
                "Find session by digest",
            )
            .await?;

        Ok(row.map(SessionRow::into_session))
    }

    async fn delete_by_digest(&self, token_digest: &str) -> Result<(), DomainError> {
        self.base
            .execute(
                sqlx::query("DELETE FROM sessions WHERE token_digest = ?1").bind(token_digest),
                "Delete session by digest",
            )
            .await?;

        Ok(())
    }

    async fn delete_by_user(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.base
            .execute(
                sqlx::query("DELETE FROM sessions WHERE user_id = ?1").bind(user_id.as_str()),
                "Delete session by user",
            )
            .await?;

        Ok(())
    }
}
