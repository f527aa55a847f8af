use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Generate a 256-bit session token from OS randomness, base64url-encoded.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// SHA-256 digest of a token, hex-encoded. Only digests are persisted.
pub fn digest_token(token: &str) -> String {
    Sha256::digest(token.as_bytes())
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(generate_token(), generate_token());
    }

    #[test]
    fn test_digest_is_deterministic() {
        let token = generate_token();
        assert_eq!(digest_token(&token), digest_token(&token));
        assert_eq!(digest_token(&token).len(), 64);
    }

    #[test]
    fn test_digest_differs_from_token() {
        let token = generate_token();
        assert_ne!(digest_token(&token), token);
    }
}
