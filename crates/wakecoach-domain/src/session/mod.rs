mod repository;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, UserId};

pub use repository::SessionRepository;

/// Session value object
/// Represents an authenticated login for a user.
///
/// Only a SHA-256 digest of the token is kept here (and in the store); the raw
/// token lives client-side and is digested before every lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    user_id: UserId,
    token_digest: String,
    expires_at: DateTime<Utc>,
    last_login_at: DateTime<Utc>,
}

impl Session {
    pub const DEFAULT_EXPIRATION_DAYS: i64 = 30;

    /// Create a new session
    pub fn new(
        user_id: UserId,
        token_digest: String,
        expires_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if token_digest.is_empty() {
            return Err(DomainError::Validation(
                "Session token digest cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            user_id,
            token_digest,
            expires_at,
            last_login_at: Utc::now(),
        })
    }

    /// Restore session from persistence
    pub fn restore(
        user_id: UserId,
        token_digest: String,
        expires_at: DateTime<Utc>,
        last_login_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            token_digest,
            expires_at,
            last_login_at,
        }
    }

    /// Check if session is still valid
    pub fn is_valid(&self) -> bool {
        Utc::now() < self.expires_at
    }

    /// Mark session as expired
    pub fn expire(&mut self) {
        self.expires_at = Utc::now() - Duration::seconds(1);
    }

    // Getters
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn token_digest(&self) -> &str {
        &self.token_digest
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn last_login_at(&self) -> DateTime<Utc> {
        self.last_login_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_session() -> Session {
        let user_id = UserId::new();
        let expires_at = Utc::now() + Duration::days(Session::DEFAULT_EXPIRATION_DAYS);

        Session::new(user_id, "digest_abc123".to_string(), expires_at).unwrap()
    }

    #[test]
    fn test_create_session() {
        let session = create_test_session();
        assert!(session.is_valid());
        assert_eq!(session.token_digest(), "digest_abc123");
    }

    #[test]
    fn test_empty_digest_rejected() {
        let user_id = UserId::new();
        let expires_at = Utc::now() + Duration::hours(24);

        let result = Session::new(user_id, String::new(), expires_at);
        assert!(result.is_err());
    }

    #[test]
    fn test_session_expiration() {
        let user_id = UserId::new();
        let expires_at = Utc::now() - Duration::hours(1);

        let session = Session::new(user_id, "digest".to_string(), expires_at).unwrap();
        assert!(!session.is_valid());
    }

    #[test]
    fn test_expire_session() {
        let mut session = create_test_session();
        assert!(session.is_valid());

        session.expire();
        assert!(!session.is_valid());
    }
}
