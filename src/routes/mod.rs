//! Router assembly: every catalog family under `/api/<family>`, plus common routes.

mod common;
mod entity;

pub use common::common_routes;
pub use entity::resource_routes;

use crate::config::ResourceCatalog;
use crate::handlers::pos::{login, register};
use crate::state::AppState;
use axum::{routing::post, Router};

/// Routes for one family; `pos` also carries the account endpoints.
pub fn family_routes(catalog: &ResourceCatalog, family: &str) -> Router<AppState> {
    let mut router = catalog
        .family(family)
        .fold(Router::new(), |r, def| r.merge(resource_routes(def)));
    if family == "pos" {
        router = router
            .route("/register", post(register))
            .route("/login", post(login));
    }
    router
}

pub fn api_routes(catalog: &ResourceCatalog) -> Router<AppState> {
    catalog.families().into_iter().fold(Router::new(), |r, family| {
        r.nest(&format!("/api/{}", family), family_routes(catalog, family))
    })
}
