use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{AppError, AppResult};

pub(crate) fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

pub(crate) fn validate_username(username: &str) -> AppResult<()> {
    lazy_static! {
        static ref USERNAME_RE: Regex = Regex::new(r"^[a-z0-9_.-]{3,32}$").unwrap();
    }
    if !USERNAME_RE.is_match(username) {
        return Err(AppError::bad_request(
            "Username must be 3-32 characters of a-z, 0-9, '_', '.', '-'",
        ));
    }
    Ok(())
}

/// Admin signup is closed unless a signup key is configured and presented.
pub(crate) fn check_signup_key(configured: Option<&str>, presented: &str) -> AppResult<()> {
    match configured {
        None => Err(AppError::forbidden("Admin signup is disabled")),
        Some(expected) if expected == presented.trim() => Ok(()),
        Some(_) => Err(AppError::forbidden("Invalid admin signup key")),
    }
}
