//! Shape checks for user input.
//!
//! These are deliberately shallow substring checks, not RFC 5322 parsing.

use crate::error::AppError;
use crate::models::UserInput;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const INVALID_EMAIL: &str = "Invalid email format.";

/// Validate a create/update payload. The first failing rule wins.
pub fn validate(input: &UserInput) -> Result<(), AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::Validation(NAME_REQUIRED.to_string()));
    }
    if !is_plausible_email(&input.email) {
        return Err(AppError::Validation(INVALID_EMAIL.to_string()));
    }
    Ok(())
}

fn is_plausible_email(email: &str) -> bool {
    !email.is_empty() && email.contains('@') && email.contains('.')
}
