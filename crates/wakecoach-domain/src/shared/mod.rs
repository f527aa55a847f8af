use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn from_string(s: &str) -> Self {
                Self(s.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

define_id!(UserId);
define_id!(WakeLogId);

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication & Authorization (1xxx)
    InvalidCredentials = 1001,
    ExpiredSession = 1002,
    EmailTaken = 1003,

    // Resource Not Found (2xxx)
    UserNotFound = 2001,
    SessionNotFound = 2002,

    // Business Logic (3xxx)
    WakeAlreadyLogged = 3001,
    WakeAfterCutoff = 3002,

    // Data & Persistence (4xxx)
    RepositoryError = 4001,
    DataIntegrityError = 4002,
    SerializationError = 4003,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,
    NetworkError = 5002,
    ExternalServiceError = 5003,

    // Validation (6xxx)
    ValidationError = 6001,
    InvalidInput = 6002,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::InvalidCredentials
            | ErrorCode::ExpiredSession
            | ErrorCode::NetworkError
            | ErrorCode::ExternalServiceError => ErrorSeverity::Warning,

            ErrorCode::UserNotFound
            | ErrorCode::SessionNotFound
            | ErrorCode::WakeAlreadyLogged
            | ErrorCode::WakeAfterCutoff
            | ErrorCode::ValidationError
            | ErrorCode::InvalidInput => ErrorSeverity::Info,

            ErrorCode::RepositoryError
            | ErrorCode::DataIntegrityError
            | ErrorCode::SerializationError
            | ErrorCode::InfrastructureError => ErrorSeverity::Error,

            _ => ErrorSeverity::Warning,
        }
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorCode::NetworkError | ErrorCode::ExternalServiceError
        )
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Session expired: {0}")]
    ExpiredSession(String),

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Already marked today")]
    WakeAlreadyLogged,

    #[error("Too late to log today")]
    WakeAfterCutoff,

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidCredentials(_) => ErrorCode::InvalidCredentials,
            DomainError::ExpiredSession(_) => ErrorCode::ExpiredSession,
            DomainError::EmailTaken(_) => ErrorCode::EmailTaken,
            DomainError::UserNotFound(_) => ErrorCode::UserNotFound,
            DomainError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            DomainError::WakeAlreadyLogged => ErrorCode::WakeAlreadyLogged,
            DomainError::WakeAfterCutoff => ErrorCode::WakeAfterCutoff,
            DomainError::Repository(_) => ErrorCode::RepositoryError,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
            DomainError::Serialization(_) => ErrorCode::SerializationError,
            DomainError::NotFound(_) => ErrorCode::UserNotFound,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        let err = DomainError::WakeAlreadyLogged;
        assert_eq!(err.code(), ErrorCode::WakeAlreadyLogged);
        assert_eq!(err.code().code(), 3001);
        assert_eq!(err.severity(), ErrorSeverity::Info);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_format_with_code() {
        let err = DomainError::Repository("db locked".to_string());
        assert_eq!(err.format_with_code(), "[4001] Repository error: db locked");
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(UserId::new().as_str(), UserId::new().as_str());
    }
}
