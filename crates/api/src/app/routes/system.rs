use axum::{extract::Extension, Json};
use chrono::Utc;

use crate::app::dto::{ApiInfo, HealthResponse};
use crate::app::errors::ApiError;
use crate::app::SharedStore;
use crate::store::UserStore;

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service info", body = ApiInfo)),
    tag = "system"
)]
pub async fn root() -> Json<ApiInfo> {
    Json(ApiInfo::current())
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service health", body = HealthResponse)),
    tag = "system"
)]
pub async fn health(
    Extension(store): Extension<SharedStore>,
) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        total_users: store.len()?,
    }))
}
