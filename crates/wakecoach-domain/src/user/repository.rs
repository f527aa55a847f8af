use async_trait::async_trait;

use super::aggregate::User;
use super::value_objects::Email;
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a new user. Fails with [`DomainError::EmailTaken`] when the email
    /// is already registered.
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError>;
}
