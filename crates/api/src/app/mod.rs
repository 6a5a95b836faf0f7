//! HTTP application wiring (Axum router + store injection).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response bodies that are not plain records
//! - `doc.rs` / `schemas.rs`: OpenAPI document and Swagger UI
//! - `errors.rs`: consistent error responses
//! - `extract.rs`: JSON body extractor with JSON rejections

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::store::{InMemoryUserStore, UserStore};

pub mod doc;
pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;
pub mod schemas;

/// Store handle shared by every handler.
pub type SharedStore = Arc<dyn UserStore>;

/// Build the full HTTP router around an explicitly constructed store.
pub fn build_app(store: SharedStore) -> Router {
    routes::router()
        .merge(SwaggerUi::new(doc::DOCS_PATH).url(doc::OPENAPI_PATH, doc::ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(Extension(store)))
}

/// Router backed by a fresh, empty in-memory store.
pub fn build_default_app() -> Router {
    build_app(Arc::new(InMemoryUserStore::new()))
}
