//! Input validation functions
//!
//! Field constraints are enforced here, before anything reaches the store,
//! so validation failures carry the offending field name.

use crate::errors::FieldError;

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if email.is_empty() {
        return Err(FieldError::new("email", "Email cannot be empty"));
    }
    if email.len() > 255 {
        return Err(FieldError::new("email", "Email too long"));
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err(FieldError::new("email", "Invalid email format"));
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), FieldError> {
    if password.len() < 8 {
        return Err(FieldError::new(
            "password",
            "Password must be at least 8 characters",
        ));
    }
    if password.len() > 128 {
        return Err(FieldError::new("password", "Password too long"));
    }
    Ok(())
}

/// Validate display name
pub fn validate_name(name: &str) -> Result<(), FieldError> {
    let len = name.chars().count();
    if len < 3 {
        return Err(FieldError::new("name", "Name must be at least 3 characters"));
    }
    if len > 50 {
        return Err(FieldError::new("name", "Name must be at most 50 characters"));
    }
    Ok(())
}

/// Validate a required job field (company or position)
pub fn validate_job_field(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(field, format!("{field} cannot be empty")));
    }
    if value.len() > 100 {
        return Err(FieldError::new(
            field,
            format!("{field} must be at most 100 characters"),
        ));
    }
    Ok(())
}
