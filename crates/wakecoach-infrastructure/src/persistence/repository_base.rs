use std::sync::Arc;

use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{SqliteArguments, SqliteQueryResult, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};

use wakecoach_domain::shared::DomainError;

/// Shared plumbing for the SQLite repositories: holds the pool and maps sqlx
/// errors to `DomainError::Repository` with a short operation context.
pub struct SqliteRepositoryBase {
    pool: Arc<SqlitePool>,
}

impl SqliteRepositoryBase {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn execute<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<SqliteQueryResult, DomainError> {
        query
            .execute(&*self.pool)
            .await
            .map_err(|e| Self::map_err(e, context))
    }

    pub async fn fetch_optional<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<Option<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        query
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| Self::map_err(e, context))
    }

    pub async fn fetch_all<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<Vec<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        query
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| Self::map_err(e, context))
    }

    fn map_err(e: sqlx::Error, context: &str) -> DomainError {
        DomainError::Repository(format!("{context}: {e}"))
    }
}
