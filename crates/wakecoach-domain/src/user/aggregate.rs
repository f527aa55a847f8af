use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::Email;
use crate::shared::{DomainError, UserId};

/// User aggregate root.
///
/// The password hash is produced by the infrastructure layer before the
/// aggregate is constructed; the domain never sees a plain password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: Email,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn register(email: Email, password_hash: String) -> Result<Self, DomainError> {
        if password_hash.is_empty() {
            return Err(DomainError::Validation(
                "Password hash cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: UserId::new(),
            email,
            password_hash,
            created_at: Utc::now(),
        })
    }

    /// Reconstruct from persistence
    pub fn restore(
        id: UserId,
        email: Email,
        password_hash: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
