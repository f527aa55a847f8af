mod task_spawner;
mod types;

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::info;

use wakecoach_domain::notification::NotificationSender;
use wakecoach_domain::reminder::{Reminder, ReminderRepository};
use wakecoach_domain::shared::{DomainError, UserId};

use types::ReminderTaskConfig;

/// One tokio timer task per enabled reminder. Each task sleeps until the next
/// local occurrence of its wall-clock time, delivers the wake-up message and
/// reschedules itself for the following day.
pub struct ReminderScheduler {
    reminder_repo: Arc<dyn ReminderRepository>,
    sender: Arc<dyn NotificationSender>,
    /// Active tasks mapped by user ID
    tasks: Arc<Mutex<HashMap<UserId, JoinHandle<()>>>>,
}

impl ReminderScheduler {
    pub fn new(
        reminder_repo: Arc<dyn ReminderRepository>,
        sender: Arc<dyn NotificationSender>,
    ) -> Self {
        Self {
            reminder_repo,
            sender,
            tasks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Load all enabled reminders and spawn their tasks.
    pub async fn start(&self) -> Result<(), DomainError> {
        let reminders = self.reminder_repo.find_all_enabled().await?;
        info!(
            "⏰ Reminder scheduler started with {} schedule(s)",
            reminders.len()
        );

        for reminder in &reminders {
            self.schedule(reminder).await;
        }

        Ok(())
    }

    /// (Re)schedule a reminder, replacing any running task for the user.
    pub async fn schedule(&self, reminder: &Reminder) {
        self.cancel(reminder.user_id()).await;

        self.spawn_reminder_task(ReminderTaskConfig {
            user_id: reminder.user_id().clone(),
            hour: reminder.hour(),
            minute: reminder.minute(),
            sender: Arc::clone(&self.sender),
        })
        .await;
    }

    /// Stop the user's task if one is running.
    pub async fn cancel(&self, user_id: &UserId) {
        let mut tasks = self.tasks.lock().await;
        if let Some(handle) = tasks.remove(user_id) {
            handle.abort();
            info!("➖ Cancelled reminder task for user {}", user_id);
        }
    }

    /// Abort every task and wait for them to wind down.
    pub async fn shutdown(&self) {
        let handles: Vec<JoinHandle<()>> = {
            let mut tasks = self.tasks.lock().await;
            tasks.drain().map(|(_, handle)| handle).collect()
        };

        for handle in &handles {
            handle.abort();
        }
        let _ = join_all(handles).await;

        info!("Reminder scheduler stopped");
    }
}
