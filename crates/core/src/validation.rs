//! Field rules shared by the create and update payloads.
//!
//! Each check returns the normalised value or a [`FieldError`]; callers
//! collect every failure of a payload before rejecting it.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::FieldError;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;

/// Youngest accepted age. The declared floor of 0 is shadowed by this rule
/// and is not enforced separately.
pub const AGE_MIN: i64 = 18;
pub const AGE_MAX: i64 = 120;

const EMAIL_MAX_LEN: usize = 254;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    ))
    .expect("email pattern must compile")
});

/// Trim surrounding whitespace and enforce the 2..=100 character window.
pub fn name(raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new("name", "must not be blank"));
    }
    let chars = trimmed.chars().count();
    if chars < NAME_MIN_CHARS {
        return Err(FieldError::new(
            "name",
            format!("must be at least {NAME_MIN_CHARS} characters"),
        ));
    }
    if chars > NAME_MAX_CHARS {
        return Err(FieldError::new(
            "name",
            format!("must be at most {NAME_MAX_CHARS} characters"),
        ));
    }
    Ok(trimmed.to_string())
}

/// Syntactic email check. The address is returned verbatim (no case folding).
pub fn email(raw: &str) -> Result<String, FieldError> {
    if raw.len() > EMAIL_MAX_LEN || !EMAIL_RE.is_match(raw) {
        return Err(FieldError::new("email", "must be a valid email address"));
    }
    Ok(raw.to_string())
}

pub fn age(raw: i64) -> Result<u8, FieldError> {
    if raw < AGE_MIN {
        return Err(FieldError::new(
            "age",
            format!("must be at least {AGE_MIN}"),
        ));
    }
    if raw > AGE_MAX {
        return Err(FieldError::new("age", format!("must be at most {AGE_MAX}")));
    }
    u8::try_from(raw).map_err(|_| FieldError::new("age", "out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn name_is_trimmed() {
        assert_eq!(name("  Ana Gomez \t").unwrap(), "Ana Gomez");
    }

    #[test]
    fn whitespace_only_name_is_blank() {
        let err = name(" ").unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.message, "must not be blank");
    }

    #[test]
    fn name_length_boundaries() {
        assert!(name("A").is_err());
        assert!(name("Al").is_ok());
        assert!(name(&"x".repeat(100)).is_ok());
        assert!(name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        assert!(name(&"é".repeat(100)).is_ok());
        assert!(name("Ñu").is_ok());
    }

    #[test]
    fn age_boundaries() {
        assert!(age(-1).is_err());
        assert!(age(0).is_err());
        assert!(age(17).is_err());
        assert_eq!(age(18).unwrap(), 18);
        assert_eq!(age(120).unwrap(), 120);
        assert!(age(121).is_err());
    }

    #[test]
    fn accepts_ordinary_addresses() {
        for raw in [
            "ana@example.com",
            "first.last+tag@sub.example.org",
            "O'Brien@example.ie",
            "x_y@a-b.co",
        ] {
            assert_eq!(email(raw).unwrap(), raw);
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for raw in [
            "",
            "plainaddress",
            "@example.com",
            "ana@",
            "ana@example",
            "ana@@example.com",
            "ana..gomez@example.com",
            ".ana@example.com",
            "ana@-example.com",
            "ana gomez@example.com",
            "ana@example.c",
        ] {
            assert!(email(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn email_case_is_preserved() {
        assert_eq!(email("Ana@Example.COM").unwrap(), "Ana@Example.COM");
    }

    proptest! {
        #[test]
        fn age_accepted_iff_within_window(raw in -1_000i64..1_000i64) {
            prop_assert_eq!(age(raw).is_ok(), (AGE_MIN..=AGE_MAX).contains(&raw));
        }

        #[test]
        fn padded_names_validate_like_their_trimmed_form(
            inner in "[a-zA-Z][a-zA-Z ]{0,120}[a-zA-Z]",
            pad in "[ \t]{0,5}",
        ) {
            let padded = format!("{pad}{inner}{pad}");
            let expected = (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&inner.chars().count());
            let result = name(&padded);
            prop_assert_eq!(result.is_ok(), expected);
            if let Ok(v) = result {
                prop_assert_eq!(v, inner);
            }
        }
    }
}
