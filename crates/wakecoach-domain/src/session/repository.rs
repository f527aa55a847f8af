use async_trait::async_trait;

use super::Session;
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Save a session, replacing any previous session for the same user.
    async fn save(&self, session: &Session) -> Result<(), DomainError>;

    async fn find_by_digest(&self, token_digest: &str) -> Result<Option<Session>, DomainError>;

    async fn delete_by_digest(&self, token_digest: &str) -> Result<(), DomainError>;

    async fn delete_by_user(&self, user_id: &UserId) -> Result<(), DomainError>;
}
