use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

/// The local hour-of-day before which a wake-up counts as valid for streak
/// purposes. Entries at or after this hour stay visible in history but never
/// contribute to the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutoffHour(u8);

impl CutoffHour {
    pub const DEFAULT_HOUR: u8 = 8;

    pub fn new(hour: u8) -> Result<Self, DomainError> {
        if hour > 23 {
            return Err(DomainError::InvalidInput(format!(
                "Cutoff hour must be 0-23, got {hour}"
            )));
        }
        Ok(Self(hour))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for CutoffHour {
    fn default() -> Self {
        Self(Self::DEFAULT_HOUR)
    }
}

impl fmt::Display for CutoffHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl FromStr for CutoffHour {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hour: u8 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidInput(format!("Invalid cutoff hour: {s}")))?;
        Self::new(hour)
    }
}
