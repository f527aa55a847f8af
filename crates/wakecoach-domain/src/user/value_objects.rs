use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

/// Normalized email address: trimmed and lowercased at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let normalized = raw.trim().to_lowercase();

        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(DomainError::Validation(format!(
                "Invalid email address: {raw}"
            )));
        };

        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(DomainError::Validation(format!(
                "Invalid email address: {raw}"
            )));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Email {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
