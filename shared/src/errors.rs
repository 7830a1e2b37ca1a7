//! Error types shared across the Jobtrack crates

use thiserror::Error;

/// Field-level validation failure
///
/// Produced by the helpers in [`crate::validation`] and translated by the
/// backend into a 400 response naming the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
