use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use userreg_core::{DomainError, NewUser, UserId, UserPatch};

use crate::app::dto::DeleteUserResponse;
use crate::app::errors::ApiError;
use crate::app::extract::ApiJson;
use crate::app::schemas::{ErrorSchema, NewUserSchema, UserPatchSchema, UserSchema};
use crate::app::SharedStore;
use crate::store::UserStore;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

#[utoipa::path(
    post,
    path = "/usuarios",
    request_body = NewUserSchema,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "Email already registered", body = ErrorSchema),
        (status = 422, description = "Invalid payload", body = ErrorSchema)
    ),
    tag = "users"
)]
pub async fn create_user(
    Extension(store): Extension<SharedStore>,
    ApiJson(body): ApiJson<NewUser>,
) -> Result<Response, ApiError> {
    let input = body.validate().inspect_err(log_rejection)?;
    let user = store.create(input).inspect_err(log_rejection)?;
    tracing::info!(user_id = %user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)).into_response())
}

#[utoipa::path(
    get,
    path = "/usuarios",
    responses((status = 200, description = "All users in creation order", body = [UserSchema])),
    tag = "users"
)]
pub async fn list_users(Extension(store): Extension<SharedStore>) -> Result<Response, ApiError> {
    Ok(Json(store.list()?).into_response())
}

#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserSchema),
        (status = 404, description = "Unknown id", body = ErrorSchema),
        (status = 422, description = "Malformed id", body = ErrorSchema)
    ),
    tag = "users"
)]
pub async fn get_user(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id: UserId = id.parse()?;
    Ok(Json(store.get(id)?).into_response())
}

#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    params(("id" = u64, Path, description = "User id")),
    request_body = UserPatchSchema,
    responses(
        (status = 200, description = "Updated user", body = UserSchema),
        (status = 400, description = "Email used by another user", body = ErrorSchema),
        (status = 404, description = "Unknown id", body = ErrorSchema),
        (status = 422, description = "Invalid payload or id", body = ErrorSchema)
    ),
    tag = "users"
)]
pub async fn update_user(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UserPatch>,
) -> Result<Response, ApiError> {
    let id: UserId = id.parse()?;
    let patch = body.validate().inspect_err(log_rejection)?;
    let user = store.update(id, &patch).inspect_err(log_rejection)?;
    tracing::info!(user_id = %id, "user updated");
    Ok(Json(user).into_response())
}

#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "User removed", body = DeleteUserResponse),
        (status = 404, description = "Unknown id", body = ErrorSchema),
        (status = 422, description = "Malformed id", body = ErrorSchema)
    ),
    tag = "users"
)]
pub async fn delete_user(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id: UserId = id.parse()?;
    let removed = store.delete(id).inspect_err(log_rejection)?;
    tracing::info!(user_id = %id, "user deleted");
    Ok(Json(DeleteUserResponse {
        message: "user deleted",
        deleted_record: removed,
    })
    .into_response())
}

fn log_rejection(err: &DomainError) {
    match err {
        DomainError::Internal(_) => {}
        DomainError::NotFound(_) => tracing::debug!(reason = %err, "request rejected"),
        _ => tracing::warn!(reason = %err, "request rejected"),
    }
}
