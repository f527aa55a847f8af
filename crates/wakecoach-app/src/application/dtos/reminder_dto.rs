use serde::{Deserialize, Serialize};

use wakecoach_domain::reminder::Reminder;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderDto {
    pub hour: u8,
    pub minute: u8,
    pub enabled: bool,
}

impl From<&Reminder> for ReminderDto {
    fn from(reminder: &Reminder) -> Self {
        Self {
            hour: reminder.hour(),
            minute: reminder.minute(),
            enabled: reminder.is_enabled(),
        }
    }
}
