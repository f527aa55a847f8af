use std::sync::Arc;

use wakecoach_domain::notification::NotificationSender;
use wakecoach_domain::shared::UserId;

/// Configuration for spawning one reminder task
pub(super) struct ReminderTaskConfig {
    pub user_id: UserId,
    pub hour: u8,
    pub minute: u8,
    pub sender: Arc<dyn NotificationSender>,
}
