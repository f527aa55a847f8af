use super::aggregate::User;
use super::value_objects::Email;

#[test]
fn test_register_user() {
    let email = Email::new("Someone@Example.com").unwrap();
    let user = User::register(email, "argon2-hash".to_string()).unwrap();

    assert_eq!(user.email().as_str(), "someone@example.com");
    assert_eq!(user.password_hash(), "argon2-hash");
}

#[test]
fn test_empty_hash_rejected() {
    let email = Email::new("someone@example.com").unwrap();
    assert!(User::register(email, String::new()).is_err());
}

#[test]
fn test_email_normalization() {
    let email = Email::new("  USER@Example.COM ").unwrap();
    assert_eq!(email.as_str(), "user@example.com");
}

#[test]
fn test_invalid_emails_rejected() {
    assert!(Email::new("not-an-email").is_err());
    assert!(Email::new("@example.com").is_err());
    assert!(Email::new("user@").is_err());
    assert!(Email::new("user@localhost").is_err());
}
