//! User domain types.
//!
//! Passwords are stored and returned as plain text, exactly as the service
//! always has; there is no hashing and no authentication (explicit
//! non-goal).

use market_records_core::UserId;
use serde::{Deserialize, Serialize};

use super::{ValidationError, check_max_chars};

/// Maximum length of a user's first name.
pub const NAME_MAX: usize = 32;
/// Maximum length of a user's last name.
pub const LASTNAME_MAX: usize = 32;
/// Maximum length of a user's email. No format validation is applied.
pub const EMAIL_MAX: usize = 128;
/// Maximum length of a password on input.
pub const PASSWORD_MAX: usize = 8;

/// Client-supplied user body (no identifier).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub user_password: String,
}

impl UserPayload {
    /// Validate the payload against the field constraints.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        check_max_chars(&mut errors, "name", &self.name, NAME_MAX);
        check_max_chars(&mut errors, "lastname", &self.lastname, LASTNAME_MAX);
        check_max_chars(&mut errors, "email", &self.email, EMAIL_MAX);
        check_max_chars(&mut errors, "user_password", &self.user_password, PASSWORD_MAX);

        ValidationError::from_fields(errors)
    }
}

/// A user record, including its store-assigned identifier.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub user_password: String,
}

impl User {
    /// Build a record from a validated payload and a store-assigned id.
    #[must_use]
    pub fn new(user_id: UserId, payload: UserPayload) -> Self {
        Self {
            user_id,
            name: payload.name,
            lastname: payload.lastname,
            email: payload.email,
            user_password: payload.user_password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> UserPayload {
        UserPayload {
            name: "Ann".to_string(),
            lastname: "Lee".to_string(),
            email: "a@x.com".to_string(),
            user_password: "secret1".to_string(),
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn email_format_is_not_validated() {
        let mut p = payload();
        p.email = "not-an-email".to_string();
        assert!(p.validate().is_ok());
    }

    #[test]
    fn password_longer_than_eight_chars_is_rejected() {
        let mut p = payload();
        p.user_password = "123456789".to_string();
        let err = p.validate().expect_err("password should fail");
        assert_eq!(err.errors.first().map(|e| e.field), Some("user_password"));
    }

    #[test]
    fn multiple_failures_are_reported_together() {
        let mut p = payload();
        p.name = "x".repeat(NAME_MAX + 1);
        p.lastname = "y".repeat(LASTNAME_MAX + 1);
        let err = p.validate().expect_err("two fields should fail");
        assert_eq!(err.errors.len(), 2);
    }

    #[test]
    fn record_constructor_copies_payload_fields() {
        let record = User::new(UserId::new(1), payload());
        assert_eq!(record.user_id.as_i64(), 1);
        assert_eq!(record.user_password, "secret1");
    }
}
