use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WakeLogDto {
    pub id: String,
    pub created_at: String, // local time (YYYY-MM-DD HH:MM)
    /// False for entries at or after the cutoff; shown in history anyway.
    pub counts_toward_streak: bool,
}
