//! User record and the payload shapes that create or modify it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult, FieldError};
use crate::id::UserId;
use crate::patch::FieldPatch;
use crate::validation;

// ─────────────────────────────────────────────────────────────────────────────
// Stored record
// ─────────────────────────────────────────────────────────────────────────────

/// A stored user.
///
/// # Invariants
/// - `id` and `registered_at` are set by the store at creation and never change.
/// - `name`, `email` and `age` always satisfy the rules in [`validation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub age: u8,
    pub registered_at: DateTime<Utc>,
}

impl User {
    /// Materialise a validated payload under a store-assigned id.
    pub fn register(id: UserId, input: ValidUser, registered_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            age: input.age,
            registered_at,
        }
    }

    /// Build the replacement record for an update.
    ///
    /// Fields set in the patch win; `id` and `registered_at` are carried over.
    pub fn apply(&self, patch: &ValidPatch) -> Self {
        Self {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            email: patch.email.clone().unwrap_or_else(|| self.email.clone()),
            age: patch.age.unwrap_or(self.age),
            registered_at: self.registered_at,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Create payload
// ─────────────────────────────────────────────────────────────────────────────

/// Create payload: every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// A create payload that passed validation (name trimmed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUser {
    pub name: String,
    pub email: String,
    pub age: u8,
}

impl NewUser {
    pub fn validate(&self) -> DomainResult<ValidUser> {
        let mut errors = Vec::new();
        let name = collect(validation::name(&self.name), &mut errors);
        let email = collect(validation::email(&self.email), &mut errors);
        let age = collect(validation::age(self.age), &mut errors);

        match (name, email, age) {
            (Some(name), Some(email), Some(age)) => Ok(ValidUser { name, email, age }),
            _ => Err(DomainError::Validation(errors)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Update payload
// ─────────────────────────────────────────────────────────────────────────────

/// Update payload: each field may be left out.
///
/// An explicit `null` is rejected since no stored field is nullable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub name: FieldPatch<String>,
    #[serde(default)]
    pub email: FieldPatch<String>,
    #[serde(default)]
    pub age: FieldPatch<i64>,
}

/// An update payload that passed validation. `None` means "keep".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u8>,
}

impl ValidPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }
}

impl UserPatch {
    pub fn validate(&self) -> DomainResult<ValidPatch> {
        let mut errors = Vec::new();
        let patch = ValidPatch {
            name: check_field(&self.name, "name", &mut errors, |v| validation::name(v)),
            email: check_field(&self.email, "email", &mut errors, |v| validation::email(v)),
            age: check_field(&self.age, "age", &mut errors, |v| validation::age(*v)),
        };

        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(DomainError::Validation(errors))
        }
    }
}

fn collect<T>(result: Result<T, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    result.map_err(|e| errors.push(e)).ok()
}

fn check_field<T, U>(
    field: &FieldPatch<T>,
    name: &'static str,
    errors: &mut Vec<FieldError>,
    rule: impl FnOnce(&T) -> Result<U, FieldError>,
) -> Option<U> {
    match field {
        FieldPatch::Missing => None,
        FieldPatch::Null => {
            errors.push(FieldError::new(name, "must not be null"));
            None
        }
        FieldPatch::Value(v) => collect(rule(v), errors),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ana() -> NewUser {
        NewUser {
            name: "Ana Gomez".to_string(),
            email: "ana@example.com".to_string(),
            age: 30,
        }
    }

    fn stored_ana() -> User {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        User::register(UserId::FIRST, ana().validate().unwrap(), at)
    }

    #[test]
    fn valid_create_payload_is_normalised() {
        let input = NewUser {
            name: "  Ana Gomez  ".to_string(),
            ..ana()
        };
        let valid = input.validate().unwrap();
        assert_eq!(valid.name, "Ana Gomez");
        assert_eq!(valid.email, "ana@example.com");
        assert_eq!(valid.age, 30);
    }

    #[test]
    fn create_reports_every_failing_field() {
        let input = NewUser {
            name: " ".to_string(),
            email: "not-an-email".to_string(),
            age: 17,
        };
        let DomainError::Validation(errors) = input.validate().unwrap_err() else {
            panic!("expected validation error");
        };
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "age"]);
    }

    #[test]
    fn create_payload_requires_all_fields() {
        let err = serde_json::from_str::<NewUser>(r#"{"name":"Ana","age":30}"#);
        assert!(err.is_err());
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let user = stored_ana();
        let patch: UserPatch = serde_json::from_str("{}").unwrap();
        let valid = patch.validate().unwrap();
        assert!(valid.is_empty());
        assert_eq!(user.apply(&valid), user);
    }

    #[test]
    fn patch_overrides_only_present_fields() {
        let user = stored_ana();
        let patch: UserPatch = serde_json::from_str(r#"{"age":31}"#).unwrap();
        let updated = user.apply(&patch.validate().unwrap());

        assert_eq!(updated.age, 31);
        assert_eq!(updated.name, user.name);
        assert_eq!(updated.email, user.email);
        assert_eq!(updated.id, user.id);
        assert_eq!(updated.registered_at, user.registered_at);
    }

    #[test]
    fn patch_cannot_touch_id_or_registration_time() {
        let user = stored_ana();
        let patch: UserPatch = serde_json::from_str(
            r#"{"id":99,"registered_at":"2000-01-01T00:00:00Z","name":"Ana Maria"}"#,
        )
        .unwrap();
        let updated = user.apply(&patch.validate().unwrap());

        assert_eq!(updated.id, UserId::FIRST);
        assert_eq!(updated.registered_at, user.registered_at);
        assert_eq!(updated.name, "Ana Maria");
    }

    #[test]
    fn patch_values_are_validated() {
        let patch = UserPatch {
            name: FieldPatch::Value("A".to_string()),
            age: FieldPatch::Value(121),
            ..UserPatch::default()
        };
        let DomainError::Validation(errors) = patch.validate().unwrap_err() else {
            panic!("expected validation error");
        };
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn explicit_null_is_rejected() {
        let patch: UserPatch = serde_json::from_str(r#"{"email":null}"#).unwrap();
        let err = patch.validate().unwrap_err();
        assert_eq!(err, DomainError::validation("email", "must not be null"));
    }

    #[test]
    fn record_serialises_with_iso_timestamp() {
        let json = serde_json::to_value(stored_ana()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Ana Gomez");
        assert_eq!(json["age"], 30);
        assert_eq!(json["registered_at"], "2024-05-01T12:00:00Z");
    }
}
