use std::path::Path;

use serde::{Deserialize, Serialize};

use wakecoach_domain::reminder::Reminder;
use wakecoach_domain::shared::DomainError;
use wakecoach_domain::wake_log::CutoffHour;
use wakecoach_infrastructure::http::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

use crate::application::ResultExt;

/// Persistent application configuration, stored as JSON in the data
/// directory. A default file is written on first run so the knobs are
/// discoverable. Secrets can also come from the environment:
/// `WAKECOACH_API_KEY`, `WAKECOACH_API_URL` and `WAKECOACH_WEBHOOK_URL`
/// override the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Local hour-of-day before which a wake-up counts toward the streak.
    pub cutoff_hour: u8,
    /// Default reminder time used when a first wake-up auto-creates one.
    pub reminder_hour: u8,
    pub reminder_minute: u8,
    /// OpenAI-compatible chat-completions endpoint for motivational text.
    pub motivation_endpoint: String,
    pub motivation_model: String,
    pub motivation_api_key: Option<String>,
    /// Webhook the reminder daemon posts to; stdout when unset.
    pub webhook_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cutoff_hour: CutoffHour::DEFAULT_HOUR,
            reminder_hour: Reminder::DEFAULT_HOUR,
            reminder_minute: Reminder::DEFAULT_MINUTE,
            motivation_endpoint: DEFAULT_ENDPOINT.to_string(),
            motivation_model: DEFAULT_MODEL.to_string(),
            motivation_api_key: None,
            webhook_url: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path).to_infra_err()?;
            serde_json::from_str(&raw)
                .map_err(|e| DomainError::Serialization(format!("Invalid config file: {e}")))?
        } else {
            let config = Self::default();
            config.save(path)?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), DomainError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).to_infra_err()?;
        }
        let raw = serde_json::to_string_pretty(self)
            .map_err(|e| DomainError::Serialization(e.to_string()))?;
        std::fs::write(path, raw).to_infra_err()
    }

    pub fn cutoff(&self) -> Result<CutoffHour, DomainError> {
        CutoffHour::new(self.cutoff_hour)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("WAKECOACH_API_KEY") {
            self.motivation_api_key = Some(key);
        }
        if let Ok(url) = std::env::var("WAKECOACH_API_URL") {
            self.motivation_endpoint = url;
        }
        if let Ok(url) = std::env::var("WAKECOACH_WEBHOOK_URL") {
            self.webhook_url = Some(url);
        }
    }

    fn validate(&self) -> Result<(), DomainError> {
        self.cutoff()?;
        if self.reminder_hour > 23 || self.reminder_minute > 59 {
            return Err(DomainError::InvalidInput(format!(
                "Invalid default reminder time {:02}:{:02}",
                self.reminder_hour, self.reminder_minute
            )));
        }
        Ok(())
    }
}
