mod reminder_dto;
mod streak_dto;
mod user_dto;
mod wake_log_dto;

pub use reminder_dto::ReminderDto;
pub use streak_dto::{MarkWakeUpDto, WakeStatusDto};
pub use user_dto::UserDto;
pub use wake_log_dto::WakeLogDto;
