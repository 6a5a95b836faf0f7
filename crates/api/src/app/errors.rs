use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use userreg_core::{DomainError, FieldError};

/// Handler error: a domain failure rendered as a JSON error body.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(value: DomainError) -> Self {
        Self(value)
    }
}

/// Unreadable bodies (bad syntax, wrong types, missing fields, wrong
/// content type) are reported like any other validation failure.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::validation("body", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            DomainError::Validation(details) => validation_error(details),
            DomainError::InvalidId(msg) => {
                validation_error(vec![FieldError::new("id", msg)])
            }
            DomainError::DuplicateEmail(_) => json_error(
                StatusCode::BAD_REQUEST,
                "duplicate_email",
                "email address is already registered",
            ),
            e @ DomainError::NotFound(_) => {
                json_error(StatusCode::NOT_FOUND, "not_found", e.to_string())
            }
            DomainError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal error",
                )
            }
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

fn validation_error(details: Vec<FieldError>) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        axum::Json(json!({
            "error": "validation_error",
            "message": "request validation failed",
            "details": details,
        })),
    )
        .into_response()
}
