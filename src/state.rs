//! Shared application state for all routes. Everything here is immutable after startup.

use crate::config::{AppConfig, ResourceCatalog};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub catalog: Arc<ResourceCatalog>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, catalog: ResourceCatalog, config: AppConfig) -> Self {
        AppState {
            pool,
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
