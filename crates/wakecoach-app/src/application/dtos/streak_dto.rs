use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WakeStatusDto {
    pub current_streak: u32,
    pub last_wake: Option<String>, // local time (YYYY-MM-DD HH:MM)
    pub already_logged_today: bool,
    /// True once the cutoff hour has passed; logging is closed for the day.
    pub too_late: bool,
    pub cutoff: String, // HH:00
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkWakeUpDto {
    /// Streak including the wake-up just recorded.
    pub streak: u32,
    pub motivation: String,
    /// Whether this wake-up auto-created the default daily reminder.
    pub reminder_created: bool,
}
