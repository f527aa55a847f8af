use async_trait::async_trait;

use crate::shared::DomainError;

/// Fallback shown whenever the provider fails or times out. Callers substitute
/// it and continue; motivational text is best-effort by design.
pub const FALLBACK_MESSAGE: &str = "Keep pushing forward! 🌅";

/// Motivational-text provider trait.
///
/// Takes the streak count (including the wake-up just logged) and a formatted
/// local wake-time label, returns a short encouraging message.
#[async_trait]
pub trait MotivationProvider: Send + Sync {
    async fn motivation_message(
        &self,
        streak_count: u32,
        wake_time_label: &str,
    ) -> Result<String, DomainError>;
}
