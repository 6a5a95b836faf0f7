use axum::{routing::get, Router};

pub mod system;
pub mod users;

/// Router for every endpoint the service exposes.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .nest("/usuarios", users::router())
}
