//! Local login
//!
//! There is no account server: credentials are checked for shape only and
//! the user identity is derived from the email address, so signing in twice
//! with the same email yields the same user.

use uuid::Uuid;

use crate::error::{PocketError, PocketResult};
use crate::models::{User, UserId};

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Authenticator that never leaves the device
#[derive(Debug, Default, Clone, Copy)]
pub struct MockAuthenticator;

impl MockAuthenticator {
    pub fn new() -> Self {
        Self
    }

    /// Check credentials and build the user they identify
    pub fn login(&self, email: &str, password: &str) -> PocketResult<User> {
        let email = email.trim().to_lowercase();

        let valid_email = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
            }
            None => false,
        };
        if !valid_email {
            tracing::warn!(%email, "login rejected: invalid email");
            return Err(PocketError::Auth(format!("Invalid email address: '{}'", email)));
        }

        if password.chars().count() < MIN_PASSWORD_LEN {
            tracing::warn!(%email, "login rejected: password too short");
            return Err(PocketError::Auth(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let id = UserId::from_uuid(Uuid::new_v5(&Uuid::NAMESPACE_URL, email.as_bytes()));
        let name = email.split('@').next().unwrap_or_default().to_string();

        tracing::info!(%email, "login accepted");
        Ok(User::new(id, name, email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_is_deterministic() {
        let auth = MockAuthenticator::new();
        let a = auth.login("Alice@Example.com", "secret1").unwrap();
        let b = auth.login("alice@example.com ", "another-secret").unwrap();

        assert_eq!(a.id, b.id);
        assert_eq!(a.email, "alice@example.com");
        assert_eq!(a.name, "alice");
    }

    #[test]
    fn test_rejects_bad_email() {
        let auth = MockAuthenticator::new();
        for email in [
            "",
            "alice",
            "@example.com",
            "alice@example",
            "alice@.com",
            "alice@example.",
        ] {
            let err = auth.login(email, "secret1").unwrap_err();
            assert!(matches!(err, PocketError::Auth(_)), "{email}");
        }
    }

    #[test]
    fn test_rejects_short_password() {
        let auth = MockAuthenticator::new();
        let err = auth.login("alice@example.com", "12345").unwrap_err();
        assert!(err.to_string().contains("at least 6"));
    }
}
