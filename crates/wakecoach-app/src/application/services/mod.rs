mod auth_service;
mod reminder_scheduler;
mod wake_up_service;


pub use auth_service::AuthService;
pub use reminder_scheduler::ReminderScheduler;
pub use wake_up_service::WakeUpService;
