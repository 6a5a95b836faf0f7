//! OpenAPI document served at `/api-docs/openapi.json` and rendered by
//! Swagger UI under `/docs`.

use utoipa::OpenApi;

use crate::app::dto::{ApiInfo, DeleteUserResponse, Endpoints, HealthResponse};
use crate::app::schemas::{
    ErrorSchema, FieldErrorSchema, NewUserSchema, UserPatchSchema, UserSchema,
};

pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User registry API",
        description = "CRUD operations over in-memory user records."
    ),
    paths(
        crate::app::routes::system::root,
        crate::app::routes::system::health,
        crate::app::routes::users::create_user,
        crate::app::routes::users::list_users,
        crate::app::routes::users::get_user,
        crate::app::routes::users::update_user,
        crate::app::routes::users::delete_user,
    ),
    components(schemas(
        UserSchema,
        NewUserSchema,
        UserPatchSchema,
        FieldErrorSchema,
        ErrorSchema,
        DeleteUserResponse,
        HealthResponse,
        ApiInfo,
        Endpoints,
    )),
    tags(
        (name = "users", description = "User records"),
        (name = "system", description = "Service info and health")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        for path in ["/", "/health", "/usuarios", "/usuarios/{id}"] {
            assert!(paths.contains_key(path), "{path} missing from OpenAPI paths");
        }
    }

    #[test]
    fn record_and_error_schemas_are_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components").schemas;
        for name in ["User", "NewUser", "UserPatch", "Error", "FieldError"] {
            assert!(schemas.contains_key(name), "{name} schema missing");
        }
    }
}
