//! Registration input checks.

use validator::{Validate, ValidationErrors};

use crate::error::{AppError, AppResult};
use crate::models::normalize_email;

#[derive(Debug, Validate)]
pub struct NewCredentials {
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(length(
        min = 8,
        max = 128,
        message = "Password must be between 8 and 128 characters."
    ))]
    pub password: String,
}

impl NewCredentials {
    /// Normalizes the email before anything is checked.
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: normalize_email(email),
            password: password.to_string(),
        }
    }

    pub fn check(&self) -> AppResult<()> {
        self.validate()
            .map_err(|e| AppError::Validation(first_message(&e)))
    }
}

fn first_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_credentials() {
        assert!(NewCredentials::new("user@example.com", "password123").check().is_ok());
        assert!(NewCredentials::new("  A@B.co ", "hunter22").check().is_ok());
    }

    #[test]
    fn rejects_invalid_email() {
        for email in ["invalid", "@nodomain", ""] {
            let err = NewCredentials::new(email, "password123").check().unwrap_err();
            match err {
                AppError::Validation(msg) => assert_eq!(msg, "Please enter a valid email address."),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_short_password() {
        let err = NewCredentials::new("user@example.com", "short").check().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn password_length_bounds() {
        let max = "p".repeat(128);
        assert!(NewCredentials::new("user@example.com", &max).check().is_ok());

        let too_long = "p".repeat(129);
        let err = NewCredentials::new("user@example.com", &too_long)
            .check()
            .unwrap_err();
        match err {
            AppError::Validation(msg) => {
                assert_eq!(msg, "Password must be between 8 and 128 characters.")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn email_error_reported_first() {
        let err = NewCredentials::new("bad", "x").check().unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Please enter a valid email address."),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
