// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod motivation;
pub mod notification;
pub mod reminder;
pub mod session;
pub mod shared;
pub mod user;
pub mod wake_log;

// Re-exports for convenience
pub use shared::{DomainError, UserId, WakeLogId};
