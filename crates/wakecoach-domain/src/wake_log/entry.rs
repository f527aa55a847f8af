use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{UserId, WakeLogId};

/// One recorded wake-up event.
///
/// Entries are immutable once recorded: `created_at` is assigned by the store
/// at insert time and never changes. Validity against the cutoff hour is not a
/// property of the entry itself; it is evaluated by [`super::StreakEngine`]
/// against a timezone and cutoff supplied by the caller, so an entry logged
/// after the cutoff still shows up in history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WakeLogEntry {
    id: WakeLogId,
    user_id: UserId,
    created_at: DateTime<Utc>,
}

impl WakeLogEntry {
    /// Record a new wake-up, stamped with the current instant.
    /// Called by the store at insert time.
    pub fn record(user_id: UserId) -> Self {
        Self {
            id: WakeLogId::new(),
            user_id,
            created_at: Utc::now(),
        }
    }

    /// Reconstruct from persistence
    pub fn restore(id: WakeLogId, user_id: UserId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            created_at,
        }
    }

    pub fn id(&self) -> &WakeLogId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
