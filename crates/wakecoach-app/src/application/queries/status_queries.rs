use std::sync::Arc;

use chrono::{DateTime, TimeZone, Timelike};
use log::warn;

use wakecoach_domain::shared::{DomainError, UserId};
use wakecoach_domain::wake_log::{CutoffHour, StreakEngine, WakeLogRepository};

use crate::application::dtos::{WakeLogDto, WakeStatusDto};

/// Read side for the dashboard-style views: today's validity, the current
/// streak, the last valid wake-up and raw history.
pub struct StatusQueries {
    wake_log_repo: Arc<dyn WakeLogRepository>,
    cutoff: CutoffHour,
}

impl StatusQueries {
    pub fn new(wake_log_repo: Arc<dyn WakeLogRepository>, cutoff: CutoffHour) -> Self {
        Self {
            wake_log_repo,
            cutoff,
        }
    }

    /// Compute the status snapshot for display.
    ///
    /// A store fetch failure is treated as an empty log collection: the
    /// dashboard shows streak 0 rather than an error page.
    pub async fn status<Tz: TimeZone>(&self, user_id: &UserId, now: DateTime<Tz>) -> WakeStatusDto
    where
        Tz::Offset: std::fmt::Display,
    {
        let logs = match self.wake_log_repo.find_by_user(user_id).await {
            Ok(logs) => logs,
            Err(e) => {
                warn!("[status] log fetch failed, showing empty history: {e}");
                Vec::new()
            }
        };

        let tz = now.timezone();

        WakeStatusDto {
            current_streak: StreakEngine::current_streak(
                &logs,
                now.date_naive(),
                self.cutoff,
                &tz,
            ),
            last_wake: StreakEngine::last_valid_wake(&logs, self.cutoff, &tz)
                .map(|instant| instant.with_timezone(&tz).format("%Y-%m-%d %H:%M").to_string()),
            already_logged_today: StreakEngine::is_valid_today(&logs, &now, self.cutoff),
            too_late: now.hour() >= self.cutoff.get() as u32,
            cutoff: self.cutoff.to_string(),
        }
    }

    /// Full history, newest first. Invalid (after-cutoff) entries are marked
    /// but listed; unlike `status`, a store failure here surfaces.
    pub async fn history<Tz: TimeZone>(
        &self,
        user_id: &UserId,
        limit: usize,
        tz: &Tz,
    ) -> Result<Vec<WakeLogDto>, DomainError>
    where
        Tz::Offset: std::fmt::Display,
    {
        let logs = self.wake_log_repo.find_by_user(user_id).await?;

        Ok(logs
            .iter()
            .take(limit)
            .map(|entry| {
                let local = entry.created_at().with_timezone(tz);
                WakeLogDto {
                    id: entry.id().to_string(),
                    created_at: local.format("%Y-%m-%d %H:%M").to_string(),
                    counts_toward_streak: local.hour() < self.cutoff.get() as u32,
                }
            })
            .collect())
    }
}
