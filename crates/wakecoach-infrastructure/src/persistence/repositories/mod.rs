pub mod reminder_repo;
pub mod session_repo;
pub mod user_repo;
pub mod wake_log_repo;

pub use reminder_repo::SqliteReminderRepository;
pub use session_repo::SqliteSessionRepository;
pub use user_repo::SqliteUserRepository;
pub use wake_log_repo::SqliteWakeLogRepository;
