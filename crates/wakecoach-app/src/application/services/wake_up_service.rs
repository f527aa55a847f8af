use std::sync::Arc;

use chrono::{DateTime, TimeZone, Timelike};
use log::{info, warn};

use wakecoach_domain::motivation::{MotivationProvider, FALLBACK_MESSAGE};
use wakecoach_domain::reminder::{Reminder, ReminderRepository};
use wakecoach_domain::shared::{DomainError, UserId};
use wakecoach_domain::user::User;
use wakecoach_domain::wake_log::{CutoffHour, StreakEngine, WakeLogRepository};

use crate::application::dtos::MarkWakeUpDto;

/// Orchestrates the mark-wake-up flow: validate against the cutoff, insert
/// the entry, fetch a motivational message (best-effort) and auto-create the
/// default reminder after a user's first successful log.
pub struct WakeUpService {
    wake_log_repo: Arc<dyn WakeLogRepository>,
    reminder_repo: Arc<dyn ReminderRepository>,
    motivation: Arc<dyn MotivationProvider>,
    cutoff: CutoffHour,
}

impl WakeUpService {
    pub fn new(
        wake_log_repo: Arc<dyn WakeLogRepository>,
        reminder_repo: Arc<dyn ReminderRepository>,
        motivation: Arc<dyn MotivationProvider>,
        cutoff: CutoffHour,
    ) -> Self {
        Self {
            wake_log_repo,
            reminder_repo,
            motivation,
            cutoff,
        }
    }

    pub async fn mark_wake_up<Tz: TimeZone>(
        &self,
        user: &User,
        now: DateTime<Tz>,
    ) -> Result<MarkWakeUpDto, DomainError>
    where
        Tz::Offset: std::fmt::Display,
    {
        // Snapshot before the insert. A fetch failure only blinds the
        // already-logged check; the insert below still decides.
        let logs = match self.wake_log_repo.find_by_user(user.id()).await {
            Ok(logs) => logs,
            Err(e) => {
                warn!("[wake] log fetch failed, proceeding with empty snapshot: {e}");
                Vec::new()
            }
        };

        if StreakEngine::is_valid_today(&logs, &now, self.cutoff) {
            return Err(DomainError::WakeAlreadyLogged);
        }
        if now.hour() >= self.cutoff.get() as u32 {
            return Err(DomainError::WakeAfterCutoff);
        }

        // An insert failure surfaces as-is; neither motivation nor reminder
        // scheduling runs in that case.
        let entry = self.wake_log_repo.insert(user.id()).await?;

        // The fresh entry is not in the snapshot yet: count the streak up to
        // yesterday and add one for the day just logged.
        let tz = now.timezone();
        let today = now.date_naive();
        let yesterday = today.pred_opt().unwrap_or(today);
        let streak = StreakEngine::current_streak(&logs, yesterday, self.cutoff, &tz) + 1;

        let wake_time_label = entry.created_at().with_timezone(&tz).format("%H:%M").to_string();
        let motivation = match self
            .motivation
            .motivation_message(streak, &wake_time_label)
            .await
        {
            Ok(message) => message,
            Err(e) => {
                warn!("[wake] motivation provider failed, using fallback: {e}");
                FALLBACK_MESSAGE.to_string()
            }
        };

        let reminder_created = self.ensure_default_reminder(user.id()).await;

        info!(
            "[wake] user {} marked wake-up at {} streak={}",
            user.email(),
            wake_time_label,
            streak
        );

        Ok(MarkWakeUpDto {
            streak,
            motivation,
            reminder_created,
        })
    }

    /// Create the default reminder after the first successful log, if the
    /// user has none yet. Failures here never fail the wake-up itself.
    async fn ensure_default_reminder(&self, user_id: &UserId) -> bool {
        match self.reminder_repo.find_by_user(user_id).await {
            Ok(Some(_)) => false,
            Ok(None) => {
                let reminder = Reminder::with_default_time(user_id.clone());
                match self.reminder_repo.save(&reminder).await {
                    Ok(()) => {
                        info!("[wake] default reminder created for user {user_id}");
                        true
                    }
                    Err(e) => {
                        warn!("[wake] failed to create default reminder: {e}");
                        false
                    }
                }
            }
            Err(e) => {
                warn!("[wake] reminder lookup failed, skipping auto-create: {e}");
                false
            }
        }
    }
}
