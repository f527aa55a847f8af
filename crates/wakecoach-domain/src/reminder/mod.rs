mod aggregate;
mod repository;

pub use aggregate::Reminder;
pub use repository::ReminderRepository;
