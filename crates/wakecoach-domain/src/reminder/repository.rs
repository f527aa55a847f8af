use async_trait::async_trait;

use super::aggregate::Reminder;
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait ReminderRepository: Send + Sync {
    /// Save a reminder, replacing the user's existing one if present.
    async fn save(&self, reminder: &Reminder) -> Result<(), DomainError>;

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Reminder>, DomainError>;

    /// All enabled reminders, for scheduler startup.
    async fn find_all_enabled(&self) -> Result<Vec<Reminder>, DomainError>;

    async fn delete_by_user(&self, user_id: &UserId) -> Result<(), DomainError>;
}
