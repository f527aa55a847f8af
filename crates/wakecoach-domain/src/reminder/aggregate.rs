use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, UserId};

/// A user's single named recurring wake-up reminder.
///
/// One reminder per user; setting a new time replaces the previous schedule.
/// `hour`/`minute` are local wall-clock values interpreted by the scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    user_id: UserId,
    hour: u8,
    minute: u8,
    enabled: bool,
    created_at: DateTime<Utc>,
}

impl Reminder {
    pub const DEFAULT_HOUR: u8 = 6;
    pub const DEFAULT_MINUTE: u8 = 30;

    pub fn new(user_id: UserId, hour: u8, minute: u8) -> Result<Self, DomainError> {
        Self::validate_time(hour, minute)?;

        Ok(Self {
            user_id,
            hour,
            minute,
            enabled: true,
            created_at: Utc::now(),
        })
    }

    /// Reminder at the default wake-up time (06:30).
    pub fn with_default_time(user_id: UserId) -> Self {
        Self {
            user_id,
            hour: Self::DEFAULT_HOUR,
            minute: Self::DEFAULT_MINUTE,
            enabled: true,
            created_at: Utc::now(),
        }
    }

    /// Reconstruct from persistence
    pub fn restore(
        user_id: UserId,
        hour: u8,
        minute: u8,
        enabled: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            hour,
            minute,
            enabled,
            created_at,
        }
    }

    // Getters
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // Business methods

    /// Move the reminder to a new wall-clock time.
    pub fn reschedule(&mut self, hour: u8, minute: u8) -> Result<(), DomainError> {
        Self::validate_time(hour, minute)?;
        self.hour = hour;
        self.minute = minute;
        self.enabled = true;
        Ok(())
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    fn validate_time(hour: u8, minute: u8) -> Result<(), DomainError> {
        if hour > 23 || minute > 59 {
            return Err(DomainError::InvalidInput(format!(
                "Invalid reminder time {hour:02}:{minute:02}"
            )));
        }
        Ok(())
    }
}
