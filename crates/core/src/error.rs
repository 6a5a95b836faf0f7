//! Domain error model.

use serde::Serialize;
use thiserror::Error;

use crate::id::UserId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
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

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Domain-level error.
///
/// Every variant leaves the store untouched; callers map them to client
/// errors except `Internal`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more payload fields failed validation.
    #[error("validation failed: {}", join_fields(.0))]
    Validation(Vec<FieldError>),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Another record already uses this exact email address.
    #[error("email address is already registered: {0}")]
    DuplicateEmail(String),

    /// No record exists for the id.
    #[error("user with id {0} not found")]
    NotFound(UserId),

    /// Storage failure (e.g. a poisoned lock).
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(field: &'static str, msg: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(field, msg)])
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_lists_every_field() {
        let err = DomainError::Validation(vec![
            FieldError::new("name", "must not be blank"),
            FieldError::new("age", "must be at least 18"),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: name: must not be blank; age: must be at least 18"
        );
    }

    #[test]
    fn not_found_names_the_id() {
        let err = DomainError::NotFound(UserId::new(7));
        assert_eq!(err.to_string(), "user with id 7 not found");
    }
}
