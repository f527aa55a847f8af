use async_trait::async_trait;

use super::entry::WakeLogEntry;
use crate::shared::{DomainError, UserId};

/// Wake-log store trait.
///
/// The store assigns `created_at` at insert time. `find_by_user` returns
/// entries sorted descending by `created_at`; the streak engine does not rely
/// on that order, but display callers (history listings) do.
#[async_trait]
pub trait WakeLogRepository: Send + Sync {
    /// Record a new wake-up for the user and return the stored entry.
    async fn insert(&self, user_id: &UserId) -> Result<WakeLogEntry, DomainError>;

    /// All entries for the user, newest first.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<WakeLogEntry>, DomainError>;
}
