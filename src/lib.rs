//! bizdesk-api: REST CRUD backend for point-of-sale, inventory, fleet rental,
//! ghost diagnostics and reviews. Every response is a `{success, message, data}` envelope.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod resources;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod sql;
pub mod state;

pub use config::{AppConfig, ResourceCatalog};
pub use error::{AppError, ConfigError};
pub use response::{respond, Envelope};
pub use schema::apply_schema;
pub use state::AppState;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Catalog of every built-in resource, validated.
pub fn catalog() -> Result<ResourceCatalog, ConfigError> {
    ResourceCatalog::new(&resources::all())
}

/// Full application router with request tracing and a body size limit.
pub fn app(state: AppState) -> Router {
    let body_limit = state.config.body_limit_bytes;
    Router::new()
        .merge(routes::common_routes())
        .merge(routes::api_routes(&state.catalog))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
