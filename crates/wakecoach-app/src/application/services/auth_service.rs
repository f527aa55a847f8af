use std::sync::Arc;

use chrono::{Duration, Utc};
use log::info;

use wakecoach_domain::session::{Session, SessionRepository};
use wakecoach_domain::shared::DomainError;
use wakecoach_domain::user::{Email, User, UserRepository};
use wakecoach_infrastructure::security::{digest_token, generate_token, hash_password, verify_password};

use crate::application::dtos::UserDto;

const MIN_PASSWORD_LEN: usize = 8;

/// Sign-up / sign-in / sign-out over the user and session repositories.
///
/// Unknown email and wrong password produce the same message, so the error
/// does not reveal which accounts exist.
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    session_repo: Arc<dyn SessionRepository>,
}

impl AuthService {
    pub fn new(user_repo: Arc<dyn UserRepository>, session_repo: Arc<dyn SessionRepository>) -> Self {
        Self {
            user_repo,
            session_repo,
        }
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<UserDto, DomainError> {
        let email = Email::new(email)?;

        if password.len() < MIN_PASSWORD_LEN {
            return Err(DomainError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(DomainError::EmailTaken(email.to_string()));
        }

        let user = User::register(email, hash_password(password)?)?;
        self.user_repo.save(&user).await?;

        info!("[auth] registered user {}", user.email());
        Ok(UserDto::from(&user))
    }

    /// Returns the raw session token; only its digest is persisted.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(String, UserDto), DomainError> {
        let email = Email::new(email)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| DomainError::InvalidCredentials("Unknown email or wrong password".to_string()))?;

        if !verify_password(password, user.password_hash())? {
            return Err(DomainError::InvalidCredentials(
                "Unknown email or wrong password".to_string(),
            ));
        }

        let token = generate_token();
        let session = Session::new(
            user.id().clone(),
            digest_token(&token),
            Utc::now() + Duration::days(Session::DEFAULT_EXPIRATION_DAYS),
        )?;
        self.session_repo.save(&session).await?;

        info!("[auth] user {} signed in", user.email());
        Ok((token, UserDto::from(&user)))
    }

    pub async fn sign_out(&self, token: &str) -> Result<(), DomainError> {
        self.session_repo.delete_by_digest(&digest_token(token)).await
    }

    /// Resolve a raw token to its user. Expired sessions are rejected and
    /// left for the next login to overwrite.
    pub async fn current_user(&self, token: &str) -> Result<User, DomainError> {
        let session = self
            .session_repo
            .find_by_digest(&digest_token(token))
            .await?
            .ok_or_else(|| DomainError::SessionNotFound("No active session".to_string()))?;

        if !session.is_valid() {
            return Err(DomainError::ExpiredSession(
                "Please log in again".to_string(),
            ));
        }

        self.user_repo
            .find_by_id(session.user_id())
            .await?
            .ok_or_else(|| DomainError::UserNotFound(session.user_id().to_string()))
    }
}
