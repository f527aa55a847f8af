use chrono::Local;
use tokio::time::Duration;
use tracing::{error, info, warn};

use wakecoach_domain::notification::NotificationMessage;

use super::types::ReminderTaskConfig;

const REMINDER_TITLE: &str = "⏰ Wake-Up Time!";
const REMINDER_BODY: &str = "Time to rise and shine! Don't break your streak 🔥";

impl super::ReminderScheduler {
    pub(super) async fn spawn_reminder_task(&self, config: ReminderTaskConfig) {
        let ReminderTaskConfig {
            user_id,
            hour,
            minute,
            sender,
        } = config;

        info!(
            "➕ Spawning reminder task for user {} at {}:{:02}",
            user_id, hour, minute
        );

        let user_id_for_storage = user_id.clone();

        let handle = tokio::spawn(async move {
            loop {
                let now = Local::now();
                // Clamp to valid wall-clock values; persisted rows are
                // validated but a bad row must not panic the daemon.
                let target_hour = (hour as u32).min(23);
                let target_minute = (minute as u32).min(59);

                if hour > 23 || minute > 59 {
                    error!(
                        "⚠️  Invalid reminder time for user {}: {}:{} (clamped to {}:{:02})",
                        user_id, hour, minute, target_hour, target_minute
                    );
                }

                let next_run = match now
                    .date_naive()
                    .and_hms_opt(target_hour, target_minute, 0)
                    .and_then(|dt| dt.and_local_timezone(now.timezone()).single())
                {
                    Some(mut next) => {
                        // Already past today's slot: deliver tomorrow.
                        if next <= now {
                            next += chrono::Duration::days(1);
                        }
                        next
                    }
                    None => {
                        error!(
                            "❌ Could not compute next run for user {} at {}:{:02}. Task will exit.",
                            user_id, target_hour, target_minute
                        );
                        break;
                    }
                };

                let duration_until_next =
                    (next_run - now).to_std().unwrap_or(Duration::from_secs(60));

                info!(
                    "Next reminder for user {}: {} (in {} seconds)",
                    user_id,
                    next_run.format("%Y-%m-%d %H:%M:%S"),
                    duration_until_next.as_secs()
                );

                tokio::time::sleep(duration_until_next).await;

                info!(
                    "⏰ [REMINDER] Delivering wake-up alert for user {} at {}",
                    user_id,
                    Local::now().format("%Y-%m-%d %H:%M:%S")
                );

                let message = NotificationMessage::new(REMINDER_TITLE, REMINDER_BODY);
                if let Err(e) = sender.send(&message).await {
                    // Delivery is fire-and-forget; the loop keeps the daily
                    // schedule alive regardless.
                    warn!("Reminder delivery failed for user {}: {}", user_id, e);
                }
            }
        });

        let mut tasks = self.tasks.lock().await;
        tasks.insert(user_id_for_storage, handle);
    }
}
