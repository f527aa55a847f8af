use std::path::{Path, PathBuf};

use wakecoach_domain::shared::DomainError;

use crate::application::ResultExt;

/// Client-side home of the raw session token; only its digest ever reaches
/// the database.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("session.token"),
        }
    }

    pub fn save(&self, token: &str) -> Result<(), DomainError> {
        std::fs::write(&self.path, token).to_infra_err()
    }

    pub fn load(&self) -> Result<Option<String>, DomainError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim().to_string();
                Ok((!token.is_empty()).then_some(token))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Infrastructure(e.to_string())),
        }
    }

    pub fn clear(&self) -> Result<(), DomainError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::Infrastructure(e.to_string())),
        }
    }
}
