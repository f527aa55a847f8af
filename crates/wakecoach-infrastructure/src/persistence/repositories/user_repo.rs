use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use wakecoach_domain::shared::{DomainError, UserId};
use wakecoach_domain::user::{Email, User, UserRepository};

use crate::persistence::SqliteRepositoryBase;

#[derive(FromRow)]
struct UserRow {
    id: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn try_into_user(self) -> Result<User, DomainError> {
        let email = Email::new(&self.email).map_err(|e| {
            DomainError::Serialization(format!("Stored email is invalid for user {}: {e}", self.id))
        })?;

        Ok(User::restore(
            UserId::from_string(&self.id),
            email,
            self.password_hash,
            self.created_at,
        ))
    }
}

pub struct SqliteUserRepository {
    base: SqliteRepositoryBase,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO users (id, email, password_hash, created_at)
            VALUES (?1, ?2, ?3, ?4)
        "#;

        let result = sqlx::query(query)
            .bind(user.id().as_str())
            .bind(user.email().as_str())
            .bind(user.password_hash())
            .bind(user.created_at())
            .execute(self.base.pool())
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(DomainError::EmailTaken(user.email().to_string()))
            }
            Err(e) => Err(DomainError::Repository(format!("Save user: {e}"))),
        }
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let query = "SELECT id, email, password_hash, created_at FROM users WHERE id = ?1";

        let row: Option<UserRow> = self
            .base
            .fetch_optional(sqlx::query_as(query).bind(id.as_str()), "Find user by ID")
            .await?;

        row.map(UserRow::try_into_user).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        let query = "SELECT id, email, password_hash, created_at FROM users WHERE email = ?1";

        let row: Option<UserRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query).bind(email.as_str()),
                "Find user by email",
            )
            .await?;

        row.map(UserRow::try_into_user).transpose()
    }
}
