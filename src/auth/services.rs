use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{AppError, AppResult};

pub const MIN_PASSWORD_LEN: usize = 8;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub(crate) fn check_password_strength(password: &str) -> AppResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::bad_request("Password too short"));
    }
    Ok(())
}

/// Validates a signup form, returning the trimmed name and normalized email.
pub(crate) fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
) -> AppResult<(String, String)> {
    let name = name.trim();
    let email = normalize_email(email);
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(AppError::bad_request("All fields are required"));
    }
    if !is_valid_email(&email) {
        return Err(AppError::bad_request("Invalid email"));
    }
    check_password_strength(password)?;
    Ok((name.to_string(), email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("student@uni.edu"));
        assert!(is_valid_email("a.b+c@sub.example.org"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("user@localhost"));
    }

    #[test]
    fn registration_normalizes_input() {
        let (name, email) =
            validate_registration("  Asha  ", "  Asha@Example.COM ", "longenough").unwrap();
        assert_eq!(name, "Asha");
        assert_eq!(email, "asha@example.com");
    }

    #[test]
    fn registration_requires_every_field() {
        let err = validate_registration("   ", "a@b.co", "longenough").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "All fields are required"));
        assert!(validate_registration("Asha", "", "longenough").is_err());
        assert!(validate_registration("Asha", "a@b.co", "").is_err());
    }

    #[test]
    fn registration_rejects_short_password() {
        let err = validate_registration("Asha", "a@b.co", "short").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "Password too short"));
    }

    #[test]
    fn registration_rejects_bad_email() {
        let err = validate_registration("Asha", "asha", "longenough").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "Invalid email"));
    }
}
