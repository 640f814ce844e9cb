use crate::error::{AppError, Result};

/// Validates login input.
///
/// # Arguments
///
/// * `email` - The submitted email address.
/// * `password` - The submitted plaintext password.
///
/// # Returns
///
/// A `Result<()>` indicating whether both required fields are present.
pub fn validate_login(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(AppError::MissingField("Email"));
    }
    if password.is_empty() {
        return Err(AppError::MissingField("Password"));
    }
    Ok(())
}

/// Validates signup input.
///
/// # Arguments
///
/// * `email` - The submitted email address.
/// * `username` - The submitted username.
/// * `password` - The submitted plaintext password.
///
/// # Returns
///
/// A `Result<()>` indicating whether all required fields are present.
pub fn validate_signup(email: &str, username: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(AppError::MissingField("Email"));
    }
    if username.trim().is_empty() {
        return Err(AppError::MissingField("Username"));
    }
    if password.is_empty() {
        return Err(AppError::MissingField("Password"));
    }
    Ok(())
}
