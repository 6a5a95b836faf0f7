use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use userreg_core::User;

use crate::app::doc::DOCS_PATH;
use crate::app::schemas::UserSchema;

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteUserResponse {
    #[schema(value_type = String, example = "user deleted")]
    pub message: &'static str,
    #[schema(value_type = UserSchema)]
    pub deleted_record: User,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(value_type = String, example = "healthy")]
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub total_users: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiInfo {
    #[schema(value_type = String)]
    pub message: &'static str,
    /// Path of the interactive API documentation.
    #[schema(value_type = String, example = "/docs")]
    pub documentation: &'static str,
    #[schema(value_type = String)]
    pub version: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Endpoints {
    #[schema(value_type = String)]
    pub create_user: &'static str,
    #[schema(value_type = String)]
    pub list_users: &'static str,
    #[schema(value_type = String)]
    pub get_user: &'static str,
    #[schema(value_type = String)]
    pub update_user: &'static str,
    #[schema(value_type = String)]
    pub delete_user: &'static str,
}

impl ApiInfo {
    pub fn current() -> Self {
        Self {
            message: "Welcome to the user registry API",
            documentation: DOCS_PATH,
            version: env!("CARGO_PKG_VERSION"),
            endpoints: Endpoints {
                create_user: "POST /usuarios",
                list_users: "GET /usuarios",
                get_user: "GET /usuarios/{id}",
                update_user: "PUT /usuarios/{id}",
                delete_user: "DELETE /usuarios/{id}",
            },
        }
    }
}
