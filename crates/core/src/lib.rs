//! `userreg-core` — user record model and validation rules.
//!
//! This crate contains **pure domain** code (no HTTP, no storage, no clocks).

pub mod error;
pub mod id;
pub mod patch;
pub mod user;
pub mod validation;

pub use error::{DomainError, DomainResult, FieldError};
pub use id::UserId;
pub use patch::FieldPatch;
pub use user::{NewUser, User, UserPatch, ValidPatch, ValidUser};
