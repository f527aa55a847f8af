use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use wakecoach_domain::shared::DomainError;

/// Hash a plain password with Argon2id and a fresh random salt.
pub fn hash_password(plain: &str) -> Result<String, DomainError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DomainError::Infrastructure(format!("Failed to hash password: {e}")))
}

/// Verify a plain password against a stored PHC-format hash.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, DomainError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| DomainError::Infrastructure(format!("Stored password hash is invalid: {e}")))?;

    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}
