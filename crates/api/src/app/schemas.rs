//! OpenAPI schema definitions for domain types.
//!
//! `userreg-core` stays free of framework derives; these wrappers mirror its
//! payload and record shapes for documentation only.

use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// A stored user.
#[derive(ToSchema)]
#[schema(as = User)]
#[allow(dead_code)]
pub struct UserSchema {
    #[schema(example = 1)]
    id: u64,
    #[schema(example = "Ana Gomez")]
    name: String,
    #[schema(example = "ana@example.com")]
    email: String,
    #[schema(minimum = 18, maximum = 120, example = 30)]
    age: u8,
    registered_at: DateTime<Utc>,
}

/// Create payload: every field required.
#[derive(ToSchema)]
#[schema(as = NewUser)]
#[allow(dead_code)]
pub struct NewUserSchema {
    /// Trimmed before validation; 2 to 100 characters.
    #[schema(example = "Ana Gomez")]
    name: String,
    /// Must be unique (exact match).
    #[schema(example = "ana@example.com")]
    email: String,
    #[schema(minimum = 18, maximum = 120, example = 30)]
    age: i64,
}

/// Update payload: absent fields are left untouched, `null` is rejected.
#[derive(ToSchema)]
#[schema(as = UserPatch)]
#[allow(dead_code)]
pub struct UserPatchSchema {
    name: Option<String>,
    email: Option<String>,
    #[schema(minimum = 18, maximum = 120)]
    age: Option<i64>,
}

#[derive(ToSchema)]
#[schema(as = FieldError)]
#[allow(dead_code)]
pub struct FieldErrorSchema {
    #[schema(example = "age")]
    field: String,
    #[schema(example = "must be at least 18")]
    message: String,
}

/// Error body shared by every failing endpoint.
#[derive(ToSchema)]
#[schema(as = Error)]
#[allow(dead_code)]
pub struct ErrorSchema {
    /// `validation_error`, `duplicate_email`, `not_found` or `internal_error`.
    #[schema(example = "validation_error")]
    error: String,
    message: String,
    /// Present on validation errors only.
    details: Option<Vec<FieldErrorSchema>>,
}
